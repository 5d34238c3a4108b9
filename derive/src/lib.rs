//! Derive macros for `#[derive(Encodable, Decodable, Field)]`.

#![no_std]

extern crate alloc;
extern crate proc_macro;

mod de;
mod en;
mod field;

use de::*;
use en::*;
use field::*;
use proc_macro::TokenStream;

#[proc_macro_derive(Encodable)]
pub fn encodable(input: TokenStream) -> TokenStream {
    let ast = syn::parse(input).unwrap();
    let gen = impl_encodable(&ast);
    gen.into()
}

#[proc_macro_derive(Decodable)]
pub fn decodable(input: TokenStream) -> TokenStream {
    let ast = syn::parse(input).unwrap();
    let gen = impl_decodable(&ast);
    gen.into()
}

#[proc_macro_derive(Field)]
pub fn field(input: TokenStream) -> TokenStream {
    let ast = syn::parse(input).unwrap();
    let gen = impl_field(&ast);
    gen.into()
}
