use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, parse_macro_input};

/// 拼接全部doc注释行，每行去掉`///`后自带的一个前导空格。
fn extract_doc(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_owned).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(enum_name, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    // 单个变体的帮助信息
    let help_entries = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let doc = extract_doc(&v.attrs);
        let pattern = match &v.fields {
            Fields::Unit => quote! { #variant_name },
            Fields::Unnamed(_) => quote! { #variant_name(..) },
            Fields::Named(_) => quote! { #variant_name { .. } },
        };
        quote! {
            Self::#pattern => #doc,
        }
    });

    // 全部变体的(name, doc)，按声明顺序排列
    let all_help_entries = variants.iter().map(|v| {
        let name = v.ident.to_string();
        let doc = extract_doc(&v.attrs);
        quote! {
            (#name, #doc)
        }
    });

    let expanded = quote! {
        #[allow(dead_code)]
        impl #enum_name {
            /// 获取帮助信息。
            pub fn help(&self) -> &'static str {
                match self {
                    #(#help_entries)*
                }
            }

            /// 获取全部帮助信息：[(name, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[
                    #(#all_help_entries),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}
