/// Spreadsheet export settings attached to a table.
///
/// Carried through resolution unchanged; nothing in this crate reads or
/// writes workbooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "with-json", derive(serde::Serialize))]
pub struct ExcelDescriptor {
    sheet_name: String,
    file_name: String,
    index: bool,
}

impl ExcelDescriptor {
    /// Export into the sheet `sheet_name`
    pub fn new(sheet_name: &str) -> Self {
        Self {
            sheet_name: sheet_name.to_owned(),
            ..Default::default()
        }
    }

    /// Workbook file to create. Empty means none was named.
    pub fn file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_owned();
        self
    }

    /// Write an index column in front of the rows
    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn get_file_name(&self) -> Option<&str> {
        if self.file_name.is_empty() {
            None
        } else {
            Some(&self.file_name)
        }
    }

    pub fn has_index(&self) -> bool {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let excel = ExcelDescriptor::new("Heroes");
        assert_eq!(excel.sheet_name(), "Heroes");
        assert_eq!(excel.get_file_name(), None);
        assert!(!excel.has_index());

        let excel = excel.file_name("heroes.xlsx").index(true);
        assert_eq!(excel.get_file_name(), Some("heroes.xlsx"));
        assert!(excel.has_index());
        assert_eq!(ExcelDescriptor::new("Heroes").file_name("").get_file_name(), None);
    }
}
