use proc_macro2::TokenStream;
use quote::quote;

pub fn impl_field(ast: &syn::DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let impl_block = quote! {
        impl #impl_generics mwire::Field for #name #ty_generics #where_clause {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn as_encodable(&self) -> ::core::option::Option<&dyn mwire::Encodable> {
                ::core::option::Option::Some(self)
            }

            fn as_decodable(&mut self) -> ::core::option::Option<&mut dyn mwire::Decodable> {
                ::core::option::Option::Some(self)
            }
        }
    };

    quote! {
        const _: () = {
            extern crate mwire;
            #impl_block
        };
    }
}
