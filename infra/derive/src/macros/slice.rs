use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

pub fn expand(input: ItemStruct) -> TokenStream {
    let handle = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let inner = format_ident!("{handle}Inner");
    let name = handle.to_string();

    let body = if matches!(fields, syn::Fields::Named(_)) {
        quote! { #fields }
    } else {
        quote! { #fields; }
    };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner #body

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: ::std::sync::Arc<#inner>,
        }

        impl #handle {
            pub fn new(inner: #inner) -> Self {
                Self { inner: ::std::sync::Arc::new(inner) }
            }
        }

        impl ::std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::std::cmp::PartialEq for #handle {
            fn eq(&self, other: &Self) -> bool {
                ::std::sync::Arc::ptr_eq(&self.inner, &other.inner)
            }
        }

        impl ::edupath_kernel::domain::registry::FeatureSlice for #handle {
            fn name(&self) -> &'static str {
                #name
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    }
}
