//! Code generation for `#[derive(EnumNames)]`.
//!
//! The emitted block does all the work during const evaluation:
//! 1. one probe signature per member, `enum_names::probe<{module_path}::{Type}::{member}>()`,
//! 2. one `FixedName` per member sized by `extract_name(signature).len()`,
//! 3. a single `static` table referencing those buffers in member-index order.
//!
//! Everything sits inside `const _: () = { ... };` so the helper items never leak into the caller's
//! namespace.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::DeriveInput;
use syn::ext::IdentExt;

use crate::attrs::Options;
use crate::eligibility::{self, EnumShape};

/// Opening of every synthesized signature. Must stay in sync with `enum_names::probe::PROBE_OPEN`.
const PROBE_OPEN: &str = "enum_names::probe<";
/// Closing of every synthesized signature. Must stay in sync with `enum_names::probe::PROBE_CLOSE`.
const PROBE_CLOSE: &str = ">()";

/// Run the eligibility check and generate the trait impls.
pub fn derive_enum_names(input: &DeriveInput) -> syn::Result<TokenStream> {
    let options = Options::from_attrs(&input.attrs)?;
    let shape = eligibility::check(input, &options)?;
    Ok(expand(&shape))
}

fn expand(shape: &EnumShape<'_>) -> TokenStream {
    let ident = shape.ident;
    let type_name = ident.unraw().to_string();
    let count = shape.count();
    let sentinel = shape.sentinel;
    let sentinel_name = sentinel.unraw().to_string();

    // Signatures cover the sentinel too so `probe` is total over the type.
    let all: Vec<_> = shape.members.iter().copied().chain(std::iter::once(sentinel)).collect();
    let signatures = all.iter().map(|member| {
        let member = member.unraw().to_string();
        quote! {
            ::core::concat!(#PROBE_OPEN, ::core::module_path!(), "::", #type_name, "::", #member, #PROBE_CLOSE)
        }
    });
    let all_indices = 0..all.len();

    let members = &shape.members;
    let indices: Vec<usize> = (0..count).collect();
    let buffers: Vec<_> = indices.iter().map(|i| format_ident!("NAME_{}", i)).collect();

    quote! {
        const _: () = {
            const SIGNATURES: [&str; #count + 1] = [#(#signatures),*];

            #(
                const #buffers: &::enum_names::FixedName<{ ::enum_names::extract_name(SIGNATURES[#indices]).len() }> =
                    &::enum_names::FixedName::new(::enum_names::extract_name(SIGNATURES[#indices]));
            )*

            static NAMES: [&str; #count] = [#(#buffers.as_str()),*];

            const _: () = ::core::assert!(
                #ident::#sentinel as usize == #count,
                "count sentinel must equal the number of members"
            );

            #[automatically_derived]
            impl ::enum_names::SizedEnum for #ident {
                const COUNT: usize = #count;
                const SENTINEL: &'static str = #sentinel_name;

                fn from_index(index: usize) -> ::core::option::Option<Self> {
                    match index {
                        #(#indices => ::core::option::Option::Some(Self::#members),)*
                        _ => ::core::option::Option::None,
                    }
                }

                fn index(self) -> usize {
                    match self {
                        #(Self::#all => #all_indices,)*
                    }
                }
            }

            #[automatically_derived]
            impl ::enum_names::SignatureProbe for #ident {
                fn probe(self) -> ::enum_names::Signature {
                    ::enum_names::Signature::Borrowed(SIGNATURES[<Self as ::enum_names::SizedEnum>::index(self)])
                }
            }

            #[automatically_derived]
            impl ::enum_names::EnumNames for #ident {
                fn try_name_table() -> ::core::result::Result<::enum_names::NameTable, ::enum_names::NameError> {
                    ::core::result::Result::Ok(<Self as ::enum_names::EnumNames>::name_table())
                }

                fn name_table() -> ::enum_names::NameTable {
                    ::enum_names::NameTable::new(&NAMES)
                }
            }
        };
    }
}
