//! Derive macro used by `sipp` to declare unit marker types.
//!
//! The `Unit` derive expands in terms of `crate::Unit`, so it is meant to be used inside `sipp` itself (or a crate
//! exposing the same crate-root trait).
//!
//! # Generated items
//!
//! For a marker type `MyUnit`, the derive emits:
//!
//! - `impl crate::Unit for MyUnit` with the rational scale `NUM / DEN` relative to the canonical unit
//! - a `const` assertion rejecting a zero numerator or denominator at compile time
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "km"`: printable unit symbol
//! - `dimension = Length`: dimension marker type
//! - `num = 1000`: numerator of the scale factor
//! - `den = 1`: denominator of the scale factor (optional, defaults to `1`)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` for a zero-sized unit marker.
///
/// Must be paired with `#[unit(symbol = "...", dimension = ..., num = ..., den = ...)]`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let num = &unit_attr.num;
    let den = &unit_attr.den;
    let message = format!("unit `{name}` needs a non-zero `num` and `den`");

    Ok(quote! {
        impl crate::Unit for #name {
            type Dim = #dimension;
            const NUM: u64 = #num;
            const DEN: u64 = #den;
            const SYMBOL: &'static str = #symbol;
        }

        const _: () = ::core::assert!((#num) != 0 && (#den) != 0, #message);
    })
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    num: Expr,
    den: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut num: Option<Expr> = None;
        let mut den: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "dimension" => dimension = Some(input.parse()?),
                "num" => num = Some(input.parse()?),
                "den" => den = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let num =
            num.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `num`"))?;
        let den = den.unwrap_or_else(|| parse_quote!(1));

        Ok(UnitAttribute {
            symbol,
            dimension,
            num,
            den,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn parses_complete_attribute() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "ft", dimension = Length, num = 3048, den = 10000)]
            pub struct Foot;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "ft");
    }

    #[test]
    fn missing_attribute_is_reported() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn missing_symbol_is_reported() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Length, num = 1)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `symbol`"));
    }

    #[test]
    fn missing_dimension_is_reported() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", num = 1)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `dimension`"));
    }

    #[test]
    fn missing_num_is_reported() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, den = 1)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `num`"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, num = 1, ratio = 1.0)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `ratio`"));
    }

    #[test]
    fn den_defaults_to_one() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "NM", dimension = Length, num = 1852)]
            pub struct NauticalMile;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("const DEN : u64 = 1"));
        assert!(code.contains("const NUM : u64 = 1852"));
    }

    #[test]
    fn expands_unit_impl() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km", dimension = Length, num = 1_000)]
            pub struct Kilometer;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Kilometer"));
        assert!(code.contains("type Dim = Length"));
        assert!(code.contains("const SYMBOL : & 'static str = \"km\""));
        assert!(code.contains("non-zero"));
    }

    #[test]
    fn accepts_trailing_comma() {
        let tokens = quote! {
            symbol = "m", dimension = Length, num = 1,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn empty_attribute_is_an_error() {
        let result: syn::Result<UnitAttribute> = syn::parse2(quote! {});
        assert!(result.is_err());
    }

    #[test]
    fn error_path_renders_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_compile_error().to_string().contains("compile_error"));
    }
}
