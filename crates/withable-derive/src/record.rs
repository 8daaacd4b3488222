use crate::util::{RecordInput, where_clause_with_bounds};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse2};

// Record expansion: the model const, the boxed-field read-out, the canonical
// constructor, and the typed accessor consts.
pub fn derive(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };
    let record = match RecordInput::parse("Record", &input) {
        Ok(record) => record,
        Err(tokens) => return tokens,
    };

    let trait_impl = record_impl(&record);
    let accessors = accessor_impl(&record);

    quote! {
        #trait_impl
        #accessors
    }
}

fn record_impl(record: &RecordInput<'_>) -> TokenStream {
    let ident = &record.input.ident;
    let name = &record.name;
    let (impl_generics, ty_generics, _) = record.input.generics.split_for_impl();
    let where_clause = where_clause_with_bounds(
        &record.input.generics,
        &quote!(::core::clone::Clone + ::core::any::Any),
    );

    let field_models = record.fields.iter().enumerate().map(|(ordinal, field)| {
        let field_name = &field.name;
        let ty = field.ty;
        let ty_label = &field.ty_label;

        quote! {
            ::withable::FieldModel {
                name: #field_name,
                ordinal: #ordinal,
                ty: #ty_label,
                type_id: ::core::any::TypeId::of::<#ty>,
            }
        }
    });

    let reads = record.fields.iter().map(|field| {
        let field_ident = field.ident;
        quote!(::withable::FieldValue::new(self.#field_ident.clone()))
    });

    let constructor = if record.fields.is_empty() {
        quote! {
            ::withable::FieldReader::new(<Self as ::withable::Record>::MODEL, fields)?;

            ::core::result::Result::Ok(Self {})
        }
    } else {
        let builds = record.fields.iter().map(|field| {
            let field_ident = field.ident;
            quote!(#field_ident: fields.take()?)
        });

        quote! {
            let mut fields =
                ::withable::FieldReader::new(<Self as ::withable::Record>::MODEL, fields)?;

            ::core::result::Result::Ok(Self {
                #(#builds),*
            })
        }
    };

    quote! {
        impl #impl_generics ::withable::Record for #ident #ty_generics #where_clause {
            const MODEL: &'static ::withable::RecordModel = &::withable::RecordModel {
                name: #name,
                path: ::core::concat!(::core::module_path!(), "::", #name),
                shape: ::withable::Shape::Named,
                lifetimes: &[],
                fields: &[#(#field_models),*],
            };

            fn record_fields(&self) -> ::std::vec::Vec<::withable::FieldValue> {
                ::std::vec![#(#reads),*]
            }

            fn from_record_fields(
                fields: ::std::vec::Vec<::withable::FieldValue>,
            ) -> ::core::result::Result<Self, ::withable::Error> {
                #constructor
            }
        }
    }
}

fn accessor_impl(record: &RecordInput<'_>) -> TokenStream {
    if record.fields.is_empty() {
        return TokenStream::new();
    }

    let ident = &record.input.ident;
    let vis = &record.input.vis;
    let (impl_generics, ty_generics, where_clause) = record.input.generics.split_for_impl();

    let consts = record.fields.iter().enumerate().map(|(ordinal, field)| {
        let field_ident = field.ident;
        let const_ident = &field.const_ident;
        let field_name = &field.name;
        let ty = field.ty;
        let doc = format!("Typed selector for the `{field_name}` field.");

        quote! {
            #[doc = #doc]
            #vis const #const_ident: ::withable::Accessor<Self, #ty> = ::withable::Accessor::new(
                #field_name,
                #ordinal,
                |record| &record.#field_ident,
                |record, value| record.#field_ident = value,
            );
        }
    });

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#consts)*
        }
    }
}
