use crate::attr::{FieldAttrs, RecordAttrs};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::BTreeMap;
use syn::{Data, DeriveInput, Error, Fields, Ident, Type, ext::IdentExt};

///
/// RecordField
/// One parsed struct field with its resolved names.
///

struct RecordField {
    ident: Ident,
    ty: Type,
    name: String,
    wire_name: String,
    attrs: FieldAttrs,
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, Error> {
    let input: DeriveInput = syn::parse2(input)?;
    let message = "Record can only be derived for non-generic structs with named fields";

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(&input.generics, message));
    }

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => return Err(Error::new_spanned(&data.fields, message)),
        },
        _ => return Err(Error::new_spanned(&input.ident, message)),
    };

    let record_attrs = RecordAttrs::parse(&input.attrs)?;
    let fields = named
        .iter()
        .map(|field| {
            let Some(ident) = field.ident.clone() else {
                return Err(Error::new_spanned(field, message));
            };
            let attrs = FieldAttrs::parse(&field.attrs)?;
            let ident_str = ident.unraw().to_string();
            let name = attrs
                .name
                .as_ref()
                .map_or_else(|| ident_str.clone(), syn::LitStr::value);
            let wire_name = attrs
                .wire
                .as_ref()
                .map_or_else(|| record_attrs.rename_all.apply(&ident_str), syn::LitStr::value);

            Ok(RecordField {
                ident,
                ty: field.ty.clone(),
                name,
                wire_name,
                attrs,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    check_unique_names(&input.ident, &fields)?;

    Ok(generate(&input.ident, &fields))
}

// Every key string may name at most one field; a field may reuse its own
// name as its wire name.
fn check_unique_names(record: &Ident, fields: &[RecordField]) -> Result<(), Error> {
    let mut owners: BTreeMap<&str, usize> = BTreeMap::new();
    let mut errors: Option<Error> = None;

    for (index, field) in fields.iter().enumerate() {
        for name in [field.name.as_str(), field.wire_name.as_str()] {
            let prev = owners.insert(name, index);

            if prev.is_some_and(|prev| prev != index) {
                let err = Error::new_spanned(
                    &field.ident,
                    format!("record '{record}' declares the name '{name}' more than once"),
                );
                match errors.as_mut() {
                    Some(errors) => errors.combine(err),
                    None => errors = Some(err),
                }
            }
        }
    }

    errors.map_or(Ok(()), Err)
}

fn generate(ident: &Ident, fields: &[RecordField]) -> TokenStream {
    let path = ident.to_string();
    let models = fields.iter().map(|f| {
        let name = &f.name;
        let wire_name = &f.wire_name;

        quote!(::mocknode::core::field::FieldModel::new(#name, #wire_name))
    });
    let models: Vec<TokenStream> = models.collect();

    let resolutions = fields.iter().zip(&models).map(|(f, model)| {
        let field_ident = &f.ident;
        let ty = &f.ty;
        let policy = f.attrs.policy_expr();

        quote! {
            #field_ident: resolver.resolve(
                &::mocknode::core::field::FieldDef::<#ty>::new(#model, #policy)
            )?
        }
    });

    let writes = fields.iter().zip(&models).map(|(f, model)| {
        let field_ident = &f.ident;

        quote! {
            writer.write(#model, &self.#field_ident)?;
        }
    });

    quote! {
        impl ::mocknode::core::record::Record for #ident {
            const PATH: &'static str = ::core::concat!(::core::module_path!(), "::", #path);

            fn fields() -> &'static [::mocknode::core::field::FieldModel] {
                const FIELDS: &[::mocknode::core::field::FieldModel] = &[#(#models),*];

                FIELDS
            }

            fn resolve_fields(
                resolver: &::mocknode::core::codec::Resolver<'_>,
            ) -> ::core::result::Result<Self, ::mocknode::core::CodecError> {
                ::core::result::Result::Ok(Self {
                    #(#resolutions),*
                })
            }

            fn write_fields(
                &self,
                writer: &mut ::mocknode::core::codec::WireWriter,
            ) -> ::core::result::Result<(), ::mocknode::core::CodecError> {
                #(#writes)*

                ::core::result::Result::Ok(())
            }
        }

        impl ::mocknode::__reexports::serde::Serialize for #ident {
            fn serialize<__S>(&self, serializer: __S) -> ::core::result::Result<__S::Ok, __S::Error>
            where
                __S: ::mocknode::__reexports::serde::Serializer,
            {
                ::mocknode::core::serialize::serialize_wire(self, serializer)
            }
        }

        impl<'de> ::mocknode::__reexports::serde::Deserialize<'de> for #ident {
            fn deserialize<__D>(deserializer: __D) -> ::core::result::Result<Self, __D::Error>
            where
                __D: ::mocknode::__reexports::serde::Deserializer<'de>,
            {
                ::mocknode::core::serialize::deserialize_wire(deserializer)
            }
        }
    }
}
