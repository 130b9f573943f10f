use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    meta::ParseNestedMeta,
    parse::{Parse, ParseStream, Parser},
    spanned::Spanned,
    *,
};

#[derive(Default)]
pub(crate) struct MessageAttribute {
    kind: Option<LitStr>,
}

impl MessageAttribute {
    fn parse(&mut self, args: ParseNestedMeta) -> Result<()> {
        if args.path.is_ident("kind") {
            let kind: LitStr = args.value()?.parse()?;

            if kind.value().is_empty() {
                return Err(Error::new(kind.span(), "the message kind cannot be empty"));
            }

            self.kind = Some(kind);
            Ok(())
        } else {
            Err(args.error("unsupported argument"))
        }
    }

    /// Resolves the kind of message for the specified structure.
    pub(crate) fn kind(&self, ident: &Ident) -> LitStr {
        self.kind
            .clone()
            .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()))
    }

    /// Reads the attribute from a structure's `#[message]` attribute, if present.
    pub(crate) fn from_attributes(attrs: &[Attribute]) -> Option<Result<Self>> {
        attrs.iter().find(|attr| is_message(attr)).map(|attr| {
            let mut me = Self::default();

            if let Meta::List(_) = attr.meta {
                attr.parse_nested_meta(|args| me.parse(args))?;
            }

            Ok(me)
        })
    }
}

impl Parse for MessageAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut me = Self::default();
        let parser = syn::meta::parser(|args| me.parse(args));
        parser.parse2(input.parse()?)?;
        Ok(me)
    }
}

pub(crate) fn is_message(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .map(|segment| segment.ident == "message")
        .unwrap_or_default()
}

pub(crate) fn expand(attribute: MessageAttribute, input: TokenStream) -> TokenStream {
    let mut struct_ = match parse2::<ItemStruct>(input) {
        Ok(struct_) => struct_,
        Err(error) => {
            return Error::new(error.span(), "#[message] can only be applied to a structure.")
                .to_compile_error()
        }
    };

    if let Fields::Named(ref mut fields) = struct_.fields {
        if let Some(field) = fields
            .named
            .iter()
            .find(|field| field.ident.as_ref().map(|id| id == "owner").unwrap_or_default())
        {
            return Error::new(field.span(), "the field 'owner' is reserved for the message owner.")
                .to_compile_error();
        }

        fields.named.push(
            Field::parse_named
                .parse2(quote! {
                    #[serde(skip)]
                    pub owner: queue::OwnerId
                })
                .unwrap(),
        );
    } else {
        return Error::new(
            struct_.span(),
            "#[message] can only be applied to a structure with named fields.",
        )
        .to_compile_error();
    }

    let kind = attribute.kind(&struct_.ident);
    let name = &struct_.ident;
    let (impl_generics, ty_generics, where_clause) = struct_.generics.split_for_impl();
    let impl_ = quote! {
        impl #impl_generics queue::message::Message for #name #ty_generics #where_clause {
            fn owner(&self) -> &queue::OwnerId {
                &self.owner
            }

            fn params(&self) -> std::result::Result<queue::message::Params, queue::message::InvalidMessageBody> {
                queue::message::to_params(self)
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        impl #impl_generics queue::message::Create for #name #ty_generics #where_clause {
            fn kind() -> queue::message::Kind {
                queue::message::Kind::new(#kind)
            }

            fn create(
                owner: queue::OwnerId,
                params: queue::message::Params,
            ) -> std::result::Result<Self, queue::message::InvalidMessageBody> {
                let mut message: Self = queue::message::from_params(params)?;
                message.owner = owner;
                Ok(message)
            }
        }

        impl #impl_generics AsRef<dyn queue::message::Message + 'static> for #name #ty_generics #where_clause {
            fn as_ref(&self) -> &(dyn queue::message::Message + 'static) {
                self
            }
        }
    };

    let mut output = quote! { #struct_ };

    output.extend(impl_);
    output
}
