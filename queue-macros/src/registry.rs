use crate::message::MessageAttribute;
use parse::{Parse, ParseStream};
use proc_macro2::{Span, TokenStream};
use punctuated::Punctuated;
use quote::{quote, ToTokens};
use std::collections::HashMap;
use syn::{spanned::Spanned, *};

pub(crate) struct RegistryAttribute {
    name: Ident,
}

impl Parse for RegistryAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let expressions = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        let mut name = Ident::new("registry", Span::call_site());

        for expression in expressions {
            if let Expr::Assign(assign) = expression {
                if let Expr::Path(left) = &*assign.left {
                    if left.path.is_ident("name") {
                        let location = assign.right.span();

                        if let Expr::Path(right) = *assign.right {
                            name = right.path.require_ident()?.clone();
                        } else {
                            return Err(Error::new(location, "invalid name"));
                        }
                    } else {
                        let location = assign.left.span();
                        return Err(Error::new(location, "unknown argument"));
                    }
                } else {
                    return Err(Error::new(assign.left.span(), "invalid argument"));
                }
            } else {
                return Err(Error::new(expression.span(), "invalid argument"));
            }
        }

        Ok(Self { name })
    }
}

pub(crate) fn expand(attribute: RegistryAttribute, input: TokenStream) -> TokenStream {
    let span = input.span();
    let module = match parse2::<ItemMod>(input) {
        Ok(module) => module,
        Err(_) => {
            return Error::new(span, "#[registry] can only be applied to a module.")
                .to_compile_error()
        }
    };

    let Some((_, items)) = module.content else {
        return module.to_token_stream();
    };

    let mut messages = Vec::new();
    let mut kinds = HashMap::new();

    for item in &items {
        let Item::Struct(struct_) = item else {
            continue;
        };

        let attribute = match MessageAttribute::from_attributes(&struct_.attrs) {
            Some(Ok(attribute)) => attribute,
            Some(Err(error)) => return error.to_compile_error(),
            None => continue,
        };

        let kind = attribute.kind(&struct_.ident).value();

        if let Some(other) = kinds.insert(kind.clone(), struct_.ident.clone()) {
            return Error::new(
                struct_.ident.span(),
                format!("message type {kind} is already used by {other}"),
            )
            .to_compile_error();
        }

        messages.push(&struct_.ident);
    }

    let name = attribute.name;
    let registry = quote! {
        /// Creates and returns a new [registry](queue::message::Registry) for all
        /// [messages](queue::message::Message).
        pub fn #name() -> queue::message::Registry {
            let mut registry = queue::message::Registry::new();
            #(registry.register::<#messages>().expect("message kinds are unique");)*
            registry
        }
    };

    let mut output = TokenStream::new();

    output.extend(items.iter().map(|item| item.to_token_stream()));
    output.extend(registry);
    output
}
