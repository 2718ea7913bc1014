use crate::util::{constraint_variant, join_variant, trim_starting_raw_identifier};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DataStruct, DeriveInput, Fields, LitBool, LitStr, Token, spanned::Spanned};

struct DeriveTable {
    ident: syn::Ident,
    table_name: Option<String>,
    auto_generated: bool,
    excel: Option<Excel>,
    fields: Vec<TableField>,
}

#[derive(Default)]
struct Excel {
    sheet: String,
    file: String,
    index: bool,
}

struct TableField {
    ty: syn::Type,
    name: String,
    constraints: Vec<syn::Ident>,
    declares_constraints: bool,
    column_type: Option<String>,
    value: Option<String>,
    belongs_to: Option<syn::Path>,
    to: Option<String>,
    join: Option<syn::Ident>,
    ignore: bool,
}

impl TableField {
    fn new(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new(
                field.span(),
                "DeriveTable requires named fields",
            ));
        };
        let mut this = Self {
            ty: field.ty.clone(),
            name: trim_starting_raw_identifier(ident),
            constraints: Vec::new(),
            declares_constraints: false,
            column_type: None,
            value: None,
            belongs_to: None,
            to: None,
            join: None,
            ignore: false,
        };
        let mut to_span = None;

        for attr in field.attrs.iter() {
            if !attr.path().is_ident("hellgate") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let flag = [
                    ("primary_key", "PrimaryKey"),
                    ("auto_increment", "AutoIncrement"),
                    ("not_null", "NotNull"),
                    ("unique", "Unique"),
                    ("foreign_key", "ForeignKey"),
                ]
                .into_iter()
                .find(|(name, _)| meta.path.is_ident(name));

                if let Some((_, variant)) = flag {
                    this.add_constraint(variant);
                } else if meta.path.is_ident("constraints") {
                    let litstr: LitStr = meta.value()?.parse()?;
                    this.declares_constraints = true;
                    for kind in litstr.value().split(',').filter(|s| !s.trim().is_empty()) {
                        match constraint_variant(kind) {
                            Some(variant) => this.add_constraint(variant),
                            None => {
                                return Err(syn::Error::new(
                                    litstr.span(),
                                    format!("Unknown constraint kind: `{}`", kind.trim()),
                                ));
                            }
                        }
                    }
                } else if meta.path.is_ident("column_type") {
                    let litstr: LitStr = meta.value()?.parse()?;
                    this.column_type = Some(litstr.value());
                } else if meta.path.is_ident("value") {
                    let litstr: LitStr = meta.value()?.parse()?;
                    this.value = Some(litstr.value());
                } else if meta.path.is_ident("belongs_to") {
                    let litstr: LitStr = meta.value()?.parse()?;
                    this.belongs_to = Some(litstr.parse()?);
                    this.add_constraint("ForeignKey");
                } else if meta.path.is_ident("to") {
                    let litstr: LitStr = meta.value()?.parse()?;
                    to_span = Some(litstr.span());
                    this.to = Some(litstr.value());
                } else if meta.path.is_ident("join") {
                    let litstr: LitStr = meta.value()?.parse()?;
                    match join_variant(&litstr.value()) {
                        Some(variant) => this.join = Some(format_ident!("{}", variant)),
                        None => {
                            return Err(syn::Error::new(
                                litstr.span(),
                                format!("Unknown join type: `{}`", litstr.value()),
                            ));
                        }
                    }
                } else if meta.path.is_ident("field_name") {
                    let litstr: LitStr = meta.value()?.parse()?;
                    this.name = litstr.value();
                } else if meta.path.is_ident("ignore") {
                    this.ignore = true;
                } else {
                    return Err(meta.error(format!(
                        "Unknown attribute parameter found: {:?}",
                        meta.path.get_ident()
                    )));
                }
                Ok(())
            })?;
        }

        if this.to.is_some() && this.belongs_to.is_none() {
            return Err(syn::Error::new(
                to_span.unwrap_or_else(|| field.span()),
                "`to` requires `belongs_to`",
            ));
        }

        Ok(this)
    }

    fn add_constraint(&mut self, variant: &str) {
        self.declares_constraints = true;
        if !self.constraints.iter().any(|c| c == variant) {
            self.constraints.push(format_ident!("{}", variant));
        }
    }

    fn has_column(&self) -> bool {
        self.declares_constraints
            || self.column_type.is_some()
            || self.value.is_some()
            || self.belongs_to.is_some()
    }

    fn expand(&self) -> TokenStream {
        let ty = &self.ty;
        let name = &self.name;
        let mut field = quote! {
            hellgate_orm::FieldDescriptor::new::<#ty>(#name)
        };

        if self.has_column() {
            let constraints = &self.constraints;
            let mut column = if !self.declares_constraints {
                quote! { hellgate_orm::ColumnDescriptor::value_only() }
            } else if constraints.is_empty() {
                quote! {
                    hellgate_orm::ColumnDescriptor::constraints(
                        ::std::vec::Vec::<hellgate_orm::ConstraintKind>::new()
                    )
                }
            } else {
                quote! {
                    hellgate_orm::ColumnDescriptor::constraints([
                        #(hellgate_orm::ConstraintKind::#constraints),*
                    ])
                }
            };
            if let Some(column_type) = &self.column_type {
                column.extend(quote! { .declared_type(#column_type) });
            }
            if let Some(value) = &self.value {
                column.extend(quote! { .with_literal(#value) });
            }
            if let Some(target) = &self.belongs_to {
                // a missing `to` is left for the resolver to report
                let to = self.to.clone().unwrap_or_default();
                column.extend(quote! {
                    .references(hellgate_orm::TypeRef::of::<#target>(), #to)
                });
            }
            field.extend(quote! { .column(#column) });
        }
        if let Some(join) = &self.join {
            field.extend(quote! { .join(hellgate_orm::JoinType::#join) });
        }
        if self.ignore {
            field.extend(quote! { .ignore() });
        }
        field
    }
}

impl DeriveTable {
    fn new(input: DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "DeriveTable does not support generic types",
            ));
        }

        let mut table_name = None;
        let mut auto_generated = false;
        let mut excel = None;
        for attr in input.attrs.iter() {
            if !attr.path().is_ident("hellgate") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table_name") {
                    let litstr: LitStr = meta.value()?.parse()?;
                    table_name = Some(litstr.value());
                } else if meta.path.is_ident("auto_generated") {
                    auto_generated = if meta.input.peek(Token![=]) {
                        meta.value()?.parse::<LitBool>()?.value
                    } else {
                        true
                    };
                } else if meta.path.is_ident("excel") {
                    let mut sheet = None;
                    let mut this = Excel::default();
                    meta.parse_nested_meta(|meta| {
                        if meta.path.is_ident("sheet") {
                            let litstr: LitStr = meta.value()?.parse()?;
                            sheet = Some(litstr.value());
                        } else if meta.path.is_ident("file") {
                            let litstr: LitStr = meta.value()?.parse()?;
                            this.file = litstr.value();
                        } else if meta.path.is_ident("index") {
                            this.index = if meta.input.peek(Token![=]) {
                                meta.value()?.parse::<LitBool>()?.value
                            } else {
                                true
                            };
                        } else {
                            return Err(meta.error(format!(
                                "Unknown excel parameter found: {:?}",
                                meta.path.get_ident()
                            )));
                        }
                        Ok(())
                    })?;
                    match sheet {
                        Some(sheet) => this.sheet = sheet,
                        None => return Err(meta.error("`excel` requires `sheet`")),
                    }
                    excel = Some(this);
                } else {
                    return Err(meta.error(format!(
                        "Unknown attribute parameter found: {:?}",
                        meta.path.get_ident()
                    )));
                }
                Ok(())
            })?;
        }

        let fields = match input.data {
            Data::Struct(DataStruct {
                fields: Fields::Named(named),
                ..
            }) => named
                .named
                .iter()
                .map(TableField::new)
                .collect::<syn::Result<Vec<_>>>()?,
            Data::Struct(DataStruct {
                fields: Fields::Unit,
                ..
            }) => Vec::new(),
            _ => {
                return Err(syn::Error::new(
                    Span::call_site(),
                    "you can only derive DeriveTable on structs with named fields",
                ));
            }
        };

        Ok(Self {
            ident: input.ident,
            table_name,
            auto_generated,
            excel,
            fields,
        })
    }

    fn expand(&self) -> TokenStream {
        let ident = &self.ident;
        let table_name = self.table_name.as_ref().map(|name| {
            quote! { .table_name(#name) }
        });
        let auto_generated = self.auto_generated;
        let excel = self.excel.as_ref().map(|Excel { sheet, file, index }| {
            quote! {
                .excel(
                    hellgate_orm::ExcelDescriptor::new(#sheet)
                        .file_name(#file)
                        .index(#index)
                )
            }
        });
        let fields = self.fields.iter().map(TableField::expand);

        quote! {
            #[automatically_derived]
            impl hellgate_orm::Table for #ident {
                fn descriptor() -> hellgate_orm::TableDescriptor {
                    hellgate_orm::TableDescriptor::new()
                        #table_name
                        .auto_generated(#auto_generated)
                        #excel
                        #(.field(#fields))*
                }
            }
        }
    }
}

pub fn expand_derive_table(input: DeriveInput) -> syn::Result<TokenStream> {
    DeriveTable::new(input).map(|table| table.expand())
}
