// Boolean expression parsing and check generation for capability checks

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Cap(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Cap(ty))
    }
}

// =============================================================================
// Capability Name Mapping
// =============================================================================

/// Capability names understood by `range_check!` and the trait each one
/// stands for.
const TIER_NAMES: &[(&str, &str)] = &[
    ("Input", "InputRange"),
    ("Forward", "ForwardRange"),
    ("Bidirectional", "BidirectionalRange"),
    ("RandomAccess", "RandomAccessRange"),
    ("Length", "HasLength"),
    ("Contiguous", "ContiguousRange"),
    ("Assignable", "Assignable"),
    ("Infinite", "StaticallyInfinite"),
    ("Finite", "Finite"),
];

/// Resolve a capability atom to the trait bound it tests.
///
/// Short tier names expand to `::tola_ranges::<Trait>`; anything else is
/// passed through untouched so user traits can be tested as well.
pub fn capability_bound(ty: &Type) -> TokenStream {
    let name = quote!(#ty).to_string();
    match TIER_NAMES.iter().find(|(short, _)| *short == name) {
        Some((_, path)) => {
            let ident = syn::Ident::new(path, proc_macro2::Span::call_site());
            quote! { ::tola_ranges::#ident }
        }
        None => quote! { #ty },
    }
}

// =============================================================================
// Check Generation
// =============================================================================

/// Generate the check body for a whole expression.
///
/// Each atom resolves independently; NOT is applied after the atom has been
/// evaluated.
pub fn generate_check_body(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Cap(cap) => generate_single_check(&capability_bound(cap), ty),
        BoolExpr::And(lhs, rhs) => {
            let l = generate_check_body(lhs, ty);
            let r = generate_check_body(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_check_body(lhs, ty);
            let r = generate_check_body(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_check_body(operand, ty);
            quote! { (!#o) }
        }
    }
}

/// Generate a single check for one trait bound.
///
/// Uses the inherent-const fallback: the inherent `VAL` shadows the trait
/// const only when `X` satisfies the bound.
fn generate_single_check(bound: &TokenStream, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __CheckFallback { const VAL: bool = false; }
            struct __Check<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __CheckFallback for __Check<X> {}
            #[allow(dead_code)]
            impl<X: ?Sized + #bound> __Check<X> { const VAL: bool = true; }
            __Check::<#ty>::VAL
        }
    }
}
