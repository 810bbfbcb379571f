//! Build-time gate deciding whether a declaration is a closed, sized enumeration.
//!
//! A qualifying enum:
//! - is an `enum` without generic parameters,
//! - has only unit members, all with implicit values `0, 1, 2, ...`,
//! - ends with the count sentinel (see [`crate::attrs::Options::sentinel`]).
//!
//! Every violation is reported as a spanned [`syn::Error`], which the derive turns into `compile_error!`.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Fields, Ident};

use crate::attrs::Options;

/// Shape of an enum that passed the check.
#[derive(Debug)]
pub struct EnumShape<'a> {
    pub ident: &'a Ident,
    /// Real members in declaration order (sentinel excluded).
    pub members: Vec<&'a Ident>,
    pub sentinel: &'a Ident,
}

impl EnumShape<'_> {
    /// Number of real members, which is also the sentinel's value.
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Validate `input` and return its member layout; `check(..).is_ok()` is the eligibility predicate.
pub fn check<'a>(input: &'a DeriveInput, options: &Options) -> syn::Result<EnumShape<'a>> {
    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(data) => {
            return Err(Error::new(
                data.struct_token.span,
                "EnumNames can only be derived for enums, not structs",
            ));
        }
        Data::Union(data) => {
            return Err(Error::new(
                data.union_token.span,
                "EnumNames can only be derived for enums, not unions",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "EnumNames cannot be derived for generic enums",
        ));
    }

    let mut errors: Option<Error> = None;
    let mut push = |err: Error| match errors.as_mut() {
        Some(existing) => existing.combine(err),
        None => errors = Some(err),
    };

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            push(Error::new_spanned(
                &variant.fields,
                format!("member `{}` carries data; only unit members are allowed", variant.ident),
            ));
        }
        if let Some((_, value)) = &variant.discriminant {
            push(Error::new_spanned(
                value,
                format!(
                    "member `{}` has an explicit value; members must use the implicit values 0, 1, 2, ...",
                    variant.ident
                ),
            ));
        }
    }

    let sentinel = options.sentinel.as_str();
    match data.variants.last() {
        None => push(Error::new_spanned(
            &input.ident,
            format!("enum `{}` has no members; declare a trailing `{sentinel}` count sentinel", input.ident),
        )),
        Some(last) if last.ident.unraw() != sentinel => push(Error::new_spanned(
            &last.ident,
            format!(
                "the last member of `{}` must be the `{sentinel}` count sentinel",
                input.ident
            ),
        )),
        Some(_) => {}
    }

    let count = data.variants.len().saturating_sub(1);
    for variant in data.variants.iter().take(count) {
        if variant.ident.unraw() == sentinel {
            push(Error::new_spanned(
                &variant.ident,
                format!("the `{sentinel}` count sentinel must be the last member"),
            ));
        }
    }

    if let Some(err) = errors {
        return Err(err);
    }

    let mut variants = data.variants.iter().map(|variant| &variant.ident);
    let members: Vec<&Ident> = variants.by_ref().take(count).collect();
    let Some(sentinel) = variants.next() else {
        return Err(Error::new_spanned(&input.ident, "missing count sentinel"));
    };

    Ok(EnumShape {
        ident: &input.ident,
        members,
        sentinel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn check_default(input: &DeriveInput) -> syn::Result<EnumShape<'_>> {
        check(input, &Options::default())
    }

    #[test]
    fn accepts_sized_enum() {
        let input: DeriveInput = parse_quote! {
            enum Fruit { Apple, Banana, Cherry, EnumSize }
        };
        let shape = check_default(&input).unwrap();
        assert_eq!(shape.ident, "Fruit");
        assert_eq!(shape.count(), 3);
        let names: Vec<String> = shape.members.iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["Apple", "Banana", "Cherry"]);
        assert_eq!(shape.sentinel, "EnumSize");
    }

    #[test]
    fn accepts_sentinel_only_enum() {
        let input: DeriveInput = parse_quote! {
            enum Empty { EnumSize }
        };
        let shape = check_default(&input).unwrap();
        assert_eq!(shape.count(), 0);
        assert!(shape.members.is_empty());
    }

    #[test]
    fn rejects_structs() {
        let input: DeriveInput = parse_quote! {
            struct Fruit { apple: u8 }
        };
        let err = check_default(&input).unwrap_err();
        assert!(err.to_string().contains("only be derived for enums"), "{err}");
    }

    #[test]
    fn rejects_missing_sentinel() {
        let input: DeriveInput = parse_quote! {
            enum Fruit { Apple, Banana }
        };
        let err = check_default(&input).unwrap_err();
        assert!(err.to_string().contains("must be the `EnumSize` count sentinel"), "{err}");
    }

    #[test]
    fn rejects_empty_enum() {
        let input: DeriveInput = parse_quote! {
            enum Never {}
        };
        let err = check_default(&input).unwrap_err();
        assert!(err.to_string().contains("has no members"), "{err}");
    }

    #[test]
    fn rejects_explicit_values() {
        let input: DeriveInput = parse_quote! {
            enum Flags { A = 1, B = 2, EnumSize }
        };
        let err = check_default(&input).unwrap_err();
        assert!(err.to_string().contains("explicit value"), "{err}");
        assert_eq!(err.into_iter().count(), 2);
    }

    #[test]
    fn rejects_data_members() {
        let input: DeriveInput = parse_quote! {
            enum Shape { Circle(f32), Square { side: f32 }, EnumSize }
        };
        let err = check_default(&input).unwrap_err();
        assert!(err.to_string().contains("carries data"), "{err}");
    }

    #[test]
    fn rejects_generics() {
        let input: DeriveInput = parse_quote! {
            enum Tagged<T> { A, EnumSize }
        };
        let err = check_default(&input).unwrap_err();
        assert!(err.to_string().contains("generic"), "{err}");
    }

    #[test]
    fn rejects_misplaced_sentinel() {
        let input: DeriveInput = parse_quote! {
            enum Fruit { EnumSize, Apple, EnumSize }
        };
        let err = check_default(&input).unwrap_err();
        assert!(err.to_string().contains("must be the last member"), "{err}");
    }

    #[test]
    fn custom_sentinel_is_honoured() {
        let input: DeriveInput = parse_quote! {
            enum Axis { X, Y, Count }
        };
        let options = Options {
            sentinel: "Count".to_string(),
        };
        assert!(check(&input, &options).is_ok());
        assert!(check_default(&input).is_err());
    }

    #[test]
    fn raw_identifiers_match_sentinel() {
        let input: DeriveInput = parse_quote! {
            enum Keyword { r#type, r#match, EnumSize }
        };
        let shape = check_default(&input).unwrap();
        assert_eq!(shape.count(), 2);
    }
}
