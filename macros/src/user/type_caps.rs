//! `#[derive(TypeCaps)]`
//!
//! | Attribute | Declares |
//! |-----------|----------|
//! | (none) | scalar: not iterable, not a pair, not a string |
//! | `#[caps(elem = T)]` | iterable; `&Self` iterates over `&T` (required by the impl) |
//! | `#[caps(string)]` | string-like, not iterable |

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, DeriveInput, Type};

enum Shape {
    Scalar,
    Iterable(Type),
    String,
}

fn parse_shape(input: &DeriveInput) -> syn::Result<Shape> {
    let mut shape = Shape::Scalar;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("caps")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("elem") {
                let ty: Type = meta.value()?.parse()?;
                shape = Shape::Iterable(ty);
                Ok(())
            } else if meta.path.is_ident("string") {
                shape = Shape::String;
                Ok(())
            } else {
                Err(meta.error("expected `elem = Type` or `string`"))
            }
        })?;
    }
    Ok(shape)
}

pub fn expand_derive_type_caps(input: DeriveInput) -> TokenStream2 {
    let shape = match parse_shape(&input) {
        Ok(shape) => shape,
        Err(err) => return err.to_compile_error(),
    };

    let name = &input.ident;
    let (_, self_generics, _) = input.generics.split_for_impl();
    let mut generics = input.generics.clone();

    let (iterable, elem, string_like) = match &shape {
        Shape::Scalar => (quote! { Absent }, quote! { Self }, quote! { Absent }),
        Shape::Iterable(elem) => {
            // The impl only exists where the borrowed iterator really yields
            // `&Elem`, so a wrong declaration can never answer "iterable".
            let predicates = &mut generics.make_where_clause().predicates;
            predicates.push(parse_quote! { #elem: ::plot_caps::detect::TypeCaps });
            predicates.push(parse_quote! {
                for<'__a> &'__a #name #self_generics: ::core::iter::IntoIterator<Item = &'__a #elem>
            });
            (quote! { Present }, quote! { #elem }, quote! { Absent })
        }
        Shape::String => (quote! { Absent }, quote! { Self }, quote! { Present }),
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::plot_caps::detect::TypeCaps for #name #ty_generics #where_clause {
            type Iterable = ::plot_caps::primitives::#iterable;
            type Elem = #elem;
            type Pair = ::plot_caps::primitives::Absent;
            type StringLike = ::plot_caps::primitives::#string_like;
            type First = Self;
            type Second = Self;
        }
    }
}
