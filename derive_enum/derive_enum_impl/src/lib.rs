extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DataEnum, DeriveInput, Ident};

fn unit_variants<'a>(input: &'a DeriveInput, derive: &str) -> Vec<&'a Ident> {
    use syn::Data::*;
    let e: &DataEnum = match &input.data {
        Enum(e) => e,
        Struct(_) | Union(_) => panic!("#[derive({derive})] only works with enums"),
    };
    e.variants
        .iter()
        .map(|v| match v.fields {
            syn::Fields::Unit => &v.ident,
            _ => panic!("#[derive({derive})] only supports unit enums for now"),
        })
        .collect()
}

fn kebab_case(ident: &Ident) -> String {
    let mut ret = String::new();
    for (i, c) in ident.to_string().chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                ret.push('-');
            }
            ret.extend(c.to_lowercase());
        } else {
            ret.push(c);
        }
    }
    ret
}

#[proc_macro_derive(EnumFrom)]
pub fn derive_enum_from(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ty = &input.ident;
    let variants = unit_variants(&input, "EnumFrom");

    let from_arms = variants.iter().enumerate().map(|(i, v)| {
        quote! { #i => Some(#ty::#v) }
    });
    let index_arms = variants.iter().enumerate().map(|(i, v)| {
        quote! { #ty::#v => #i }
    });
    let index_body = if variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #(#index_arms,)* } }
    };

    TokenStream::from(quote! {
        impl ::derive_enum::EnumFrom for #ty {
            fn from_index(i: usize) -> Option<Self> {
                match i {
                    #(#from_arms,)*
                    _ => None,
                }
            }

            fn index(&self) -> usize {
                #index_body
            }
        }
    })
}

#[proc_macro_derive(EnumCount)]
pub fn derive_enum_count(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ty = &input.ident;
    let len = unit_variants(&input, "EnumCount").len();

    TokenStream::from(quote! {
        impl ::derive_enum::EnumCount for #ty {
            const COUNT: usize = #len;
        }
    })
}

#[proc_macro_derive(EnumName)]
pub fn derive_enum_name(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ty = &input.ident;
    let variants = unit_variants(&input, "EnumName");

    let arms = variants.iter().map(|v| {
        let name = kebab_case(v);
        quote! { #ty::#v => #name }
    });
    let body = if variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #(#arms,)* } }
    };

    TokenStream::from(quote! {
        impl ::derive_enum::EnumName for #ty {
            fn name(&self) -> &'static str {
                #body
            }
        }
    })
}
