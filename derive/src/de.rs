use crate::en::field_ident;
use alloc::vec::Vec;
use proc_macro2::TokenStream;
use quote::quote;

pub fn impl_decodable(ast: &syn::DeriveInput) -> TokenStream {
    let body = if let syn::Data::Struct(s) = &ast.data {
        s
    } else {
        panic!("#[derive(Decodable)] is only defined for structs.");
    };

    let stmts: Vec<_> = body
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let ident = field_ident(index, field);

            quote! { mwire::decode_field(input, &mut self.#ident)?; }
        })
        .collect();
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let impl_block = quote! {
        impl #impl_generics mwire::Decodable for #name #ty_generics #where_clause {
            fn decode(&mut self, input: &mut dyn ::std::io::Read) -> ::core::result::Result<(), mwire::Error> {
                #(#stmts)*
                ::core::result::Result::Ok(())
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
