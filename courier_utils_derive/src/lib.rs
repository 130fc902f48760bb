use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Instruments a service method with a tracing span.
///
/// Arguments are forwarded to [`tracing::instrument`], so `skip(self)` and
/// friends work as usual. Entering the method emits a `call` event and the
/// return value is recorded at trace level.
#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    let meta = if meta.is_empty() {
        quote! { ret(level = "trace") }
    } else {
        quote! { ret(level = "trace"), #meta }
    };

    quote! {
        #[::tracing::instrument(#meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}
