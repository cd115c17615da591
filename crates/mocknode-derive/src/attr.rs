use convert_case::{Case, Casing};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, Error, Expr, ExprLit, Lit, LitStr, spanned::Spanned};

///
/// RenameRule
/// How wire names are derived for fields without an explicit `wire`.
///

#[derive(Clone, Copy)]
pub enum RenameRule {
    Pascal,
    Camel,
    Snake,
    Kebab,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self, Error> {
        match lit.value().as_str() {
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            other => Err(Error::new_spanned(
                lit,
                format!(
                    "unsupported rename_all rule '{other}'; expected PascalCase, camelCase, snake_case or kebab-case"
                ),
            )),
        }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Camel => name.to_case(Case::Camel),
            Self::Snake => name.to_case(Case::Snake),
            Self::Kebab => name.to_case(Case::Kebab),
        }
    }
}

///
/// RecordAttrs
/// Container-level `#[record(...)]` options.
///

pub struct RecordAttrs {
    pub rename_all: RenameRule,
}

impl RecordAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut rename_all = RenameRule::Pascal;

        for attr in attrs.iter().filter(|a| a.path().is_ident("record")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    rename_all = RenameRule::parse(&lit)?;
                    Ok(())
                } else {
                    Err(meta.error("unsupported record attribute"))
                }
            })?;
        }

        Ok(Self { rename_all })
    }
}

///
/// DefaultAttr
///

pub enum DefaultAttr {
    Constant(Expr),
    Computed(Expr),
}

///
/// FieldAttrs
/// Field-level `#[field(...)]` options.
///

#[derive(Default)]
pub struct FieldAttrs {
    pub name: Option<LitStr>,
    pub wire: Option<LitStr>,
    pub default: Option<DefaultAttr>,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("field")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    out.name = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("wire") {
                    out.wire = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("default") {
                    let expr: Expr = meta.value()?.parse()?;
                    out.set_default(DefaultAttr::Constant(expr), meta.path.span())?;
                } else if meta.path.is_ident("default_with") {
                    let expr: Expr = meta.value()?.parse()?;
                    out.set_default(DefaultAttr::Computed(expr), meta.path.span())?;
                } else {
                    return Err(meta.error("unsupported field attribute"));
                }

                Ok(())
            })?;
        }

        for lit in [out.name.as_ref(), out.wire.as_ref()].into_iter().flatten() {
            if lit.value().is_empty() {
                return Err(Error::new_spanned(lit, "field names must not be empty"));
            }
        }

        Ok(out)
    }

    fn set_default(&mut self, default: DefaultAttr, span: Span) -> Result<(), Error> {
        if self.default.is_some() {
            return Err(Error::new(
                span,
                "a field takes one of `default` or `default_with`, not both",
            ));
        }
        self.default = Some(default);

        Ok(())
    }

    /// Tokens for the field's `DefaultPolicy`.
    pub fn policy_expr(&self) -> TokenStream {
        match &self.default {
            // string literals convert into owned text types
            Some(DefaultAttr::Constant(expr @ Expr::Lit(ExprLit {
                lit: Lit::Str(_), ..
            }))) => quote! {
                ::mocknode::core::field::DefaultPolicy::Constant(
                    ::core::convert::Into::into(#expr)
                )
            },
            Some(DefaultAttr::Constant(expr)) => quote! {
                ::mocknode::core::field::DefaultPolicy::Constant(#expr)
            },
            Some(DefaultAttr::Computed(expr)) => quote! {
                ::mocknode::core::field::DefaultPolicy::Computed(#expr)
            },
            None => quote! {
                ::mocknode::core::field::DefaultPolicy::Constant(
                    ::core::default::Default::default()
                )
            },
        }
    }
}
