use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token,
};

/// One statement of the comprehension.
enum Stmt {
    /// `pat <- expr`
    Bind { pat: syn::Pat, expr: syn::Expr },
    /// `let pat: ty = expr`, the type is optional.
    Let {
        pat: syn::Pat,
        ty: Option<syn::Type>,
        expr: syn::Expr,
    },
    /// A bare expression, sequenced for its side.
    Expr(syn::Expr),
    /// `yield expr`
    Yield {
        yield_token: Token![yield],
        expr: syn::Expr,
    },
}

impl Parse for Stmt {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![yield]) {
            let yield_token = input.parse()?;
            let expr = input.parse()?;
            return Ok(Self::Yield { yield_token, expr });
        }

        if input.peek(Token![let]) {
            input.parse::<Token![let]>()?;
            let pat = syn::Pat::parse_single(input)?;
            let ty = if input.peek(Token![:]) {
                input.parse::<Token![:]>()?;
                Some(input.parse()?)
            } else {
                None
            };
            input.parse::<Token![=]>()?;
            let expr = input.parse()?;
            return Ok(Self::Let { pat, ty, expr });
        }

        // `x < -y` has a space between the two punctuations and is not a bind,
        // while `x<-y` is one.
        let fork = input.fork();
        if syn::Pat::parse_single(&fork).is_ok() && fork.peek(Token![<-]) {
            let pat = syn::Pat::parse_single(input)?;
            input.parse::<Token![<-]>()?;
            let expr = input.parse()?;
            return Ok(Self::Bind { pat, expr });
        }

        Ok(Self::Expr(input.parse()?))
    }
}

struct Comprehension {
    stmts: Vec<Stmt>,
}

impl Parse for Comprehension {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let stmts = Punctuated::<Stmt, Token![;]>::parse_terminated(input)?;
        Ok(Self {
            stmts: stmts.into_iter().collect(),
        })
    }
}

/// The expansion of the statements after some point.
enum Expansion {
    /// An expression evaluating to an `Either`.
    Either(TokenStream),
    /// A plain value from `yield`, still to be put on the right side.
    Value {
        body: TokenStream,
        yield_token: Token![yield],
    },
}

impl Expansion {
    /// Run `expr` first and continue with `self` on its right value.
    fn bind(self, pat: TokenStream, expr: syn::Expr) -> Self {
        match self {
            Expansion::Either(body) => {
                Expansion::Either(quote! { (#expr).flat_map(|#pat| { #body }) })
            }
            Expansion::Value { body, .. } => {
                Expansion::Either(quote! { (#expr).map_right(|#pat| { #body }) })
            }
        }
    }

    fn wrap(self, f: impl FnOnce(TokenStream) -> TokenStream) -> Self {
        match self {
            Expansion::Either(body) => Expansion::Either(f(body)),
            Expansion::Value { body, yield_token } => Expansion::Value {
                body: f(body),
                yield_token,
            },
        }
    }
}

impl Comprehension {
    fn expand(self) -> syn::Result<TokenStream> {
        let mut stmts = self.stmts.into_iter().rev();

        let mut expansion = match stmts.next() {
            Some(Stmt::Yield { yield_token, expr }) => Expansion::Value {
                body: quote! { #expr },
                yield_token,
            },
            Some(Stmt::Expr(expr)) => Expansion::Either(quote! { #expr }),
            Some(Stmt::Bind { pat, .. }) | Some(Stmt::Let { pat, .. }) => {
                return Err(syn::Error::new_spanned(
                    pat,
                    "the last statement must be `yield` or an expression",
                ))
            }
            None => {
                return Err(syn::Error::new(
                    Span::call_site(),
                    "expected at least one statement",
                ))
            }
        };

        for stmt in stmts {
            expansion = match stmt {
                Stmt::Bind { pat, expr } => expansion.bind(quote! { #pat }, expr),
                Stmt::Expr(expr) => expansion.bind(quote! { _ }, expr),
                Stmt::Let { pat, ty, expr } => {
                    let ty = ty.map(|ty| quote! { : #ty });
                    expansion.wrap(|body| quote! { { let #pat #ty = #expr; #body } })
                }
                Stmt::Yield { yield_token, .. } => {
                    return Err(syn::Error::new_spanned(
                        yield_token,
                        "`yield` must be the last statement",
                    ))
                }
            };
        }

        match expansion {
            Expansion::Either(tokens) => Ok(tokens),
            Expansion::Value { yield_token, .. } => Err(syn::Error::new_spanned(
                yield_token,
                "`yield` needs a `<-` binding before it",
            )),
        }
    }
}

pub fn expand_either(input: TokenStream) -> syn::Result<TokenStream> {
    syn::parse2::<Comprehension>(input)?.expand()
}
