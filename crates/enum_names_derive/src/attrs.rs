//! Parsing of the `#[enum_names(...)]` helper attribute.

use syn::{Attribute, Ident, LitStr};

/// Spelling of the count sentinel when no attribute overrides it.
pub const DEFAULT_SENTINEL: &str = "EnumSize";

/// Options collected from `#[enum_names(...)]` on the enum declaration.
///
/// ## Examples
/// ```ignore
/// #[derive(Clone, Copy, EnumNames)]
/// #[enum_names(sentinel = "Count")]
/// enum Axis { X, Y, Z, Count }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Name of the trailing member that marks the member count.
    pub sentinel: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl Options {
    /// Read every `#[enum_names(...)]` attribute, later keys overriding earlier ones.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = Options::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("enum_names")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("sentinel") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let name = lit.value();
                    if syn::parse_str::<Ident>(&name).is_err() {
                        return Err(syn::Error::new(
                            lit.span(),
                            format!("`{name}` is not a valid member identifier"),
                        ));
                    }
                    options.sentinel = name;
                    Ok(())
                } else {
                    Err(meta.error("unsupported enum_names option; expected `sentinel = \"...\"`"))
                }
            })?;
        }

        Ok(options)
    }
}
