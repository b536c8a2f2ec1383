//! `#[derive(Proxyable)]`
//!
//! Forwards `Proxyable<T>` to the one field marked `#[proxy(T)]`:
//!
//! ```ignore
//! #[derive(Proxyable)]
//! struct Series {
//!     #[proxy(f64)]
//!     values: Vec<f64>,
//!     name: String,
//! }
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Fields, Index, Member, Type};

pub fn expand_derive_proxyable(input: DeriveInput) -> TokenStream2 {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(input.span(), "Proxyable can only be derived for structs"));
    };

    let fields: Vec<_> = match &data.fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
        Fields::Unit => Vec::new(),
    };

    let mut marked: Option<(Member, &Type, Type)> = None;
    for (i, field) in fields.iter().enumerate() {
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("proxy")) {
            if marked.is_some() {
                return Err(syn::Error::new(attr.span(), "only one field may be marked #[proxy(..)]"));
            }
            let elem: Type = attr.parse_args()?;
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index::from(i)),
            };
            marked = Some((member, &field.ty, elem));
        }
    }

    let Some((member, field_ty, elem)) = marked else {
        return Err(syn::Error::new(input.span(), "mark the data field with #[proxy(ElementType)]"));
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::plot_caps::view::Proxyable<#elem> for #name #ty_generics #where_clause {
            #[inline]
            fn proxy(&self) -> &[#elem] {
                <#field_ty as ::plot_caps::view::Proxyable<#elem>>::proxy(&self.#member)
            }
        }
    })
}
