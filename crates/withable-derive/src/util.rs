use convert_case::{Case, Casing};
use darling::FromAttributes;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, Generics, Ident, Type};

///
/// FieldAttrs
///

#[derive(Debug, FromAttributes)]
#[darling(attributes(record))]
struct FieldAttrs {
    accessor: Option<String>,
}

///
/// RecordField
///

pub struct RecordField<'a> {
    pub ident: &'a Ident,
    pub name: String,
    pub const_ident: Ident,
    pub ty: &'a Type,
    pub ty_label: String,
}

///
/// RecordInput
///
/// Shared front half of both derives. Gates the input to an owned struct
/// with named fields, strips raw-identifier prefixes from field names, and
/// resolves the accessor const name for every field.
///

pub struct RecordInput<'a> {
    pub input: &'a DeriveInput,
    pub name: String,
    pub fields: Vec<RecordField<'a>>,
}

impl<'a> RecordInput<'a> {
    pub fn parse(derive: &str, input: &'a DeriveInput) -> Result<Self, TokenStream> {
        let Data::Struct(data) = &input.data else {
            return Err(shape_error(derive, input));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(shape_error(derive, input));
        };

        if let Some(def) = input.generics.lifetimes().next() {
            let lifetime = &def.lifetime;
            return Err(Error::new_spanned(
                lifetime,
                format!(
                    "{derive} cannot be derived for `{}`: the record borrows `{lifetime}` from an enclosing scope",
                    input.ident,
                ),
            )
            .to_compile_error());
        }

        let mut fields: Vec<RecordField<'a>> = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let Some(ident) = &field.ident else {
                continue;
            };
            let attrs = match FieldAttrs::from_attributes(&field.attrs) {
                Ok(attrs) => attrs,
                Err(err) => return Err(err.write_errors()),
            };

            let name = ident_name(ident);
            let const_ident = accessor_ident(ident, &name, attrs.accessor.as_deref())?;

            if let Some(prev) = fields.iter().find(|prev| prev.const_ident == const_ident) {
                return Err(Error::new_spanned(
                    ident,
                    format!(
                        "accessor const `{const_ident}` is generated for both `{}` and `{name}`; rename one with #[record(accessor = \"...\")]",
                        prev.name,
                    ),
                )
                .to_compile_error());
            }

            fields.push(RecordField {
                ident,
                name,
                const_ident,
                ty: &field.ty,
                ty_label: type_label(&field.ty),
            });
        }

        Ok(Self {
            input,
            name: ident_name(&input.ident),
            fields,
        })
    }
}

fn shape_error(derive: &str, input: &DeriveInput) -> TokenStream {
    Error::new_spanned(
        &input.ident,
        format!("{derive} can only be derived for structs with named fields"),
    )
    .to_compile_error()
}

// Const name for a field's accessor: the override when given, otherwise the
// field name in upper snake case.
fn accessor_ident(ident: &Ident, name: &str, requested: Option<&str>) -> Result<Ident, TokenStream> {
    let Some(accessor) = requested else {
        return Ok(format_ident!(
            "{}",
            name.to_case(Case::UpperSnake),
            span = ident.span()
        ));
    };

    if syn::parse_str::<Ident>(accessor).is_err() {
        return Err(Error::new_spanned(
            ident,
            format!("accessor override `{accessor}` for field `{name}` is not a valid identifier"),
        )
        .to_compile_error());
    }
    if !accessor.is_case(Case::UpperSnake) {
        return Err(Error::new_spanned(
            ident,
            format!("accessor override `{accessor}` for field `{name}` must be UPPER_SNAKE_CASE"),
        )
        .to_compile_error());
    }

    Ok(format_ident!("{accessor}", span = ident.span()))
}

/// Identifier text with any raw prefix stripped.
pub fn ident_name(ident: &Ident) -> String {
    let raw = ident.to_string();

    match raw.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => raw,
    }
}

/// Display label for a field type, as written at the declaration site.
pub fn type_label(ty: &Type) -> String {
    quote!(#ty).to_string().split_whitespace().collect()
}

/// Where clause for a generated impl: every type parameter gets `bounds`,
/// and any predicates already on the type are kept.
pub fn where_clause_with_bounds(generics: &Generics, bounds: &TokenStream) -> TokenStream {
    let mut predicates: Vec<TokenStream> = generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            quote!(#ident: #bounds)
        })
        .collect();

    if let Some(where_clause) = &generics.where_clause {
        predicates.extend(where_clause.predicates.iter().map(|p| quote!(#p)));
    }

    if predicates.is_empty() {
        TokenStream::new()
    } else {
        quote!(where #(#predicates),*)
    }
}
