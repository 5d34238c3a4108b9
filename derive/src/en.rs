use alloc::vec::Vec;
use proc_macro2::TokenStream;
use quote::quote;

pub fn impl_encodable(ast: &syn::DeriveInput) -> TokenStream {
    let body = if let syn::Data::Struct(s) = &ast.data {
        s
    } else {
        panic!("#[derive(Encodable)] is only defined for structs.");
    };

    let stmts: Vec<_> = body
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let ident = field_ident(index, field);

            quote! { mwire::encode_field(out, &self.#ident)?; }
        })
        .collect();
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let impl_block = quote! {
        impl #impl_generics mwire::Encodable for #name #ty_generics #where_clause {
            fn encode(&self, out: &mut dyn ::std::io::Write) -> ::core::result::Result<(), mwire::Error> {
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

pub fn field_ident(index: usize, field: &syn::Field) -> TokenStream {
    if let Some(ident) = &field.ident {
        quote! { #ident }
    } else {
        let index = syn::Index::from(index);
        quote! { #index }
    }
}
