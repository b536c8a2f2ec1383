// `Type: Expr` parsing and probe generation for `is_detected!`

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    Path, Token, Type,
};

/// `Clone & !(Copy | Iterator)` over trait paths.
///
/// `!` binds tightest, then `&`, then `|`.
#[derive(Clone, Debug)]
pub enum TraitExpr {
    Trait(Path),
    All(Box<TraitExpr>, Box<TraitExpr>),
    Any(Box<TraitExpr>, Box<TraitExpr>),
    Not(Box<TraitExpr>),
}

impl Parse for TraitExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a trait after `:`"));
        }
        parse_any(input)
    }
}

fn parse_any(input: ParseStream) -> syn::Result<TraitExpr> {
    let mut expr = parse_all(input)?;
    while input.parse::<Option<Token![|]>>()?.is_some() {
        expr = TraitExpr::Any(Box::new(expr), Box::new(parse_all(input)?));
    }
    Ok(expr)
}

fn parse_all(input: ParseStream) -> syn::Result<TraitExpr> {
    let mut expr = parse_not(input)?;
    while input.parse::<Option<Token![&]>>()?.is_some() {
        expr = TraitExpr::All(Box::new(expr), Box::new(parse_not(input)?));
    }
    Ok(expr)
}

fn parse_not(input: ParseStream) -> syn::Result<TraitExpr> {
    if input.parse::<Option<Token![!]>>()?.is_some() {
        return Ok(TraitExpr::Not(Box::new(parse_not(input)?)));
    }
    if input.peek(syn::token::Paren) {
        let group;
        syn::parenthesized!(group in input);
        let inner: TraitExpr = group.parse()?;
        if !group.is_empty() {
            return Err(group.error("expected `&`, `|` or `)`"));
        }
        return Ok(inner);
    }
    parse_trait(input)
}

fn parse_trait(input: ParseStream) -> syn::Result<TraitExpr> {
    let lookahead = input.lookahead1();
    if !(lookahead.peek(syn::Ident) || lookahead.peek(Token![::]) || lookahead.peek(Token![crate])) {
        return Err(lookahead.error());
    }
    Ok(TraitExpr::Trait(input.parse()?))
}

/// Input of `is_detected!(Type: Expr)`.
pub struct DetectInput {
    pub ty: Type,
    pub expr: TraitExpr,
}

impl Parse for DetectInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: TraitExpr = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("expected `&`, `|` or the end of the expression"));
        }
        Ok(DetectInput { ty, expr })
    }
}

/// Expands to a block usable in `const` context.
///
/// Every trait in the expression gets one inherent const on a local
/// `__Probe<X>` (true when `X` has the trait) shadowing a fallback trait
/// const (false). The boolean expression then reads those consts.
pub fn expand_detect(input: &DetectInput) -> TokenStream {
    let mut traits = Vec::new();
    collect_traits(&input.expr, &mut traits);

    let probes = traits.iter().enumerate().map(|(i, path)| {
        let fallback = format_ident!("__Lacks{}", i);
        let has = format_ident!("HAS_{}", i);
        quote! {
            trait #fallback { const #has: bool = false; }
            impl<X: ?Sized> #fallback for __Probe<X> {}
            impl<X: ?Sized + #path> __Probe<X> {
                #[allow(dead_code)]
                const #has: bool = true;
            }
        }
    });

    let ty = &input.ty;
    let mut next = 0;
    let value = expand_expr(&input.expr, ty, &mut next);

    quote! {
        {
            #[allow(dead_code)]
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            #(#probes)*
            #value
        }
    }
}

fn collect_traits<'a>(expr: &'a TraitExpr, out: &mut Vec<&'a Path>) {
    match expr {
        TraitExpr::Trait(path) => out.push(path),
        TraitExpr::All(lhs, rhs) | TraitExpr::Any(lhs, rhs) => {
            collect_traits(lhs, out);
            collect_traits(rhs, out);
        }
        TraitExpr::Not(inner) => collect_traits(inner, out),
    }
}

// Walks in the same order as `collect_traits`, so the n-th trait reads `HAS_n`.
fn expand_expr(expr: &TraitExpr, ty: &Type, next: &mut usize) -> TokenStream {
    match expr {
        TraitExpr::Trait(_) => {
            let has = format_ident!("HAS_{}", *next);
            *next += 1;
            quote! { <__Probe<#ty>>::#has }
        }
        TraitExpr::All(lhs, rhs) => {
            let l = expand_expr(lhs, ty, next);
            let r = expand_expr(rhs, ty, next);
            quote! { (#l && #r) }
        }
        TraitExpr::Any(lhs, rhs) => {
            let l = expand_expr(lhs, ty, next);
            let r = expand_expr(rhs, ty, next);
            quote! { (#l || #r) }
        }
        TraitExpr::Not(inner) => {
            let inner = expand_expr(inner, ty, next);
            quote! { (!#inner) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(expr: &TraitExpr) -> String {
        match expr {
            TraitExpr::Trait(path) => quote!(#path).to_string().replace(' ', ""),
            TraitExpr::All(l, r) => format!("({} & {})", render(l), render(r)),
            TraitExpr::Any(l, r) => format!("({} | {})", render(l), render(r)),
            TraitExpr::Not(inner) => format!("!{}", render(inner)),
        }
    }

    fn error(src: &str) -> String {
        match syn::parse_str::<DetectInput>(src) {
            Ok(_) => panic!("`{src}` should not parse"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_precedence() {
        let expr: TraitExpr = syn::parse_str("Clone & !Copy | Debug").unwrap();
        assert_eq!(render(&expr), "((Clone & !Copy) | Debug)");
    }

    #[test]
    fn test_parens_and_paths() {
        let input: DetectInput =
            syn::parse_str("Vec<f64>: !(core::fmt::Display | IntoIterator<Item = f64>)").unwrap();
        assert_eq!(render(&input.expr), "!(core::fmt::Display | IntoIterator<Item=f64>)");
    }

    #[test]
    fn test_malformed_expressions() {
        assert!(error("u8: Copy Clone").contains("expected `&`, `|`"));
        assert!(error("u8:").contains("expected a trait"));
        assert!(error("u8: Copy & 3").contains("expected"));
        assert!(error("u8: (Copy Clone)").contains("expected `&`, `|` or `)`"));
    }

    #[test]
    fn test_one_const_per_trait() {
        let input: DetectInput = syn::parse_str("u8: Copy & !(Clone | Copy)").unwrap();
        let out = expand_detect(&input).to_string();
        assert!(out.contains("HAS_2"));
        assert!(!out.contains("HAS_3"));
        assert!(!out.contains("PhantomData :: < u8 >"));
    }
}
