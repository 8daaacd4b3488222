use crate::util::{RecordInput, where_clause_with_bounds};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse2};

// Withable expansion: the trait impl plus one with_<field> method per field.
pub fn derive(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };
    let record = match RecordInput::parse("Withable", &input) {
        Ok(record) => record,
        Err(tokens) => return tokens,
    };

    let ident = &record.input.ident;
    let vis = &record.input.vis;
    let (impl_generics, ty_generics, _) = record.input.generics.split_for_impl();
    let trait_where = where_clause_with_bounds(
        &record.input.generics,
        &quote!(::core::clone::Clone + ::core::any::Any),
    );
    let inherent_where =
        where_clause_with_bounds(&record.input.generics, &quote!(::core::clone::Clone));

    let methods = record.fields.iter().map(|field| {
        let field_ident = field.ident;
        let method = format_ident!("with_{}", field.name, span = field_ident.span());
        let ty = field.ty;
        let doc = format!("Copy of this record with `{}` replaced by `value`.", field.name);

        quote! {
            #[doc = #doc]
            #[must_use]
            #vis fn #method(&self, value: #ty) -> Self {
                let mut next = ::core::clone::Clone::clone(self);
                next.#field_ident = value;
                next
            }
        }
    });

    let inherent = if record.fields.is_empty() {
        TokenStream::new()
    } else {
        quote! {
            impl #impl_generics #ident #ty_generics #inherent_where {
                #(#methods)*
            }
        }
    };

    quote! {
        impl #impl_generics ::withable::Withable for #ident #ty_generics #trait_where {}

        #inherent
    }
}
