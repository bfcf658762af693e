//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type Constraint Parsing: `Type: Expr`
// =============================================================================

/// A single type constraint: `Type: BoolExpr`
///
/// Used in:
/// - `range_check!(Slice<'static, u8>: Forward & !Infinite)`
#[derive(Clone)]
pub struct TypeConstraint {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeConstraint {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeConstraint { ty, expr })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items, allowing a trailing comma.
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}
