//! `range_check!` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};

use crate::common::{generate_check_body, parse_comma_separated, TypeConstraint};

/// Input for range_check!: one or more `Type: Expr` checks
pub struct RangeCheckInput {
    checks: Vec<TypeConstraint>,
}

impl Parse for RangeCheckInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let checks: Vec<TypeConstraint> = parse_comma_separated(input)?;
        if checks.is_empty() {
            return Err(input.error("range_check! expects at least one `Type: Expr` check"));
        }
        Ok(RangeCheckInput { checks })
    }
}

pub fn expand_range_check(input: RangeCheckInput) -> TokenStream {
    // Reference every checked type so imports used only here stay "used"
    let type_refs = input.checks.iter().map(|c| {
        let ty = &c.ty;
        quote! { __use_type::<#ty>(::core::marker::PhantomData); }
    });
    let check_exprs = input
        .checks
        .iter()
        .map(|c| generate_check_body(&c.expr, &c.ty));

    quote! {
        {
            fn __use_type<__T: ?Sized>(_: ::core::marker::PhantomData<__T>) {}
            #(#type_refs)*
            (#(#check_exprs)&&*)
        }
    }
}
