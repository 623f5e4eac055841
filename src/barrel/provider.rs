//! Provider wrapping: nests the render body of the providers barrel inside
//! a newly added provider's tag.

use super::exports::ExportSet;
use super::imports::ensure_import_line;
use regex::Regex;
use std::sync::LazyLock;

/// `return ( <expr> );`, possibly over several lines.
static BLOCK_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)return\s*\(\s*(.+?)\s*\);").unwrap());

/// `return <expr>;`
static INLINE_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)return\s+<.+?>;").unwrap());

/// Terminal state of a provider wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapOutcome {
    /// The body already renders the provider.
    AlreadyWrapped,
    Wrapped,
    /// No `return (...)` or `return <...>;` was found.
    UnrecognizedBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderWrap {
    pub text: String,
    pub outcome: WrapOutcome,
}

/// The render expression of a barrel and the byte range of the `return`
/// statement holding it.
struct ReturnBody<'a> {
    start: usize,
    end: usize,
    expr: &'a str,
}

fn find_return_body(text: &str) -> Option<ReturnBody<'_>> {
    if let Some(captures) = BLOCK_RETURN.captures(text) {
        let statement = captures.get(0)?;
        return Some(ReturnBody {
            start: statement.start(),
            end: statement.end(),
            expr: captures.get(1)?.as_str().trim(),
        });
    }

    let statement = INLINE_RETURN.find(text)?;
    let expr = statement
        .as_str()
        .trim_start_matches("return")
        .trim_end_matches(';')
        .trim();
    Some(ReturnBody {
        start: statement.start(),
        end: statement.end(),
        expr,
    })
}

/// Whether `expr` contains an opening `<name>` tag, with or without props.
fn has_opening_tag(expr: &str, name: &str) -> bool {
    let pattern = format!(r"<{}(\s[^>]*)?>", regex::escape(name));
    Regex::new(&pattern).is_ok_and(|re| re.is_match(expr))
}

/// Imports the provider into `barrel` and wraps its render body with
/// `<provider_name>`.
///
/// The output always uses the parenthesized block form:
///
/// ```text
/// return (
///   <Provider>
///   <expr>
/// </Provider>
/// );
/// ```
pub fn wrap_provider(
    barrel: &str,
    exports: &ExportSet,
    provider_name: &str,
    import_path: &str,
) -> ProviderWrap {
    let text = ensure_import_line(barrel, exports, import_path, provider_name);

    let Some(body) = find_return_body(&text) else {
        return ProviderWrap {
            text,
            outcome: WrapOutcome::UnrecognizedBody,
        };
    };

    if has_opening_tag(body.expr, provider_name) {
        return ProviderWrap {
            text,
            outcome: WrapOutcome::AlreadyWrapped,
        };
    }

    let wrapped = format!(
        "{}return (\n  <{provider_name}>\n  {}\n</{provider_name}>\n);{}",
        &text[..body.start],
        body.expr,
        &text[body.end..]
    );
    ProviderWrap {
        text: wrapped,
        outcome: WrapOutcome::Wrapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> ExportSet {
        ExportSet::from_names(["AuthProvider"], true)
    }

    #[test]
    fn inline_jsx_is_wrapped_in_block_form() {
        let barrel = "const App = ({ children }) => {\n  return <div>{children}</div>;\n};\n";
        let result = wrap_provider(barrel, &auth(), "AuthProvider", "./auth-provider");
        assert_eq!(result.outcome, WrapOutcome::Wrapped);
        assert!(result.text.starts_with("import AuthProvider from './auth-provider';\n"));
        assert!(result
            .text
            .contains("return (\n  <AuthProvider>\n  <div>{children}</div>\n</AuthProvider>\n);"));
    }

    #[test]
    fn block_jsx_is_wrapped() {
        let barrel = "function App() {\n  return (\n    <Layout>\n      {children}\n    </Layout>\n  );\n}\n";
        let result = wrap_provider(barrel, &auth(), "AuthProvider", "./auth-provider");
        assert_eq!(result.outcome, WrapOutcome::Wrapped);
        assert_eq!(
            result.text,
            "import AuthProvider from './auth-provider';\nfunction App() {\n  return (\n  <AuthProvider>\n  <Layout>\n      {children}\n    </Layout>\n</AuthProvider>\n);\n}\n"
        );
    }

    #[test]
    fn fragment_body_is_wrapped() {
        let barrel = "  return <>{children}</>;\n";
        let result = wrap_provider(barrel, &auth(), "AuthProvider", "./auth-provider");
        assert!(result
            .text
            .contains("return (\n  <AuthProvider>\n  <>{children}</>\n</AuthProvider>\n);"));
    }

    #[test]
    fn second_run_is_a_no_op() {
        let barrel = "  return <div>{children}</div>;\n";
        let first = wrap_provider(barrel, &auth(), "AuthProvider", "./auth-provider");
        let second = wrap_provider(&first.text, &auth(), "AuthProvider", "./auth-provider");
        assert_eq!(second.outcome, WrapOutcome::AlreadyWrapped);
        assert_eq!(second.text, first.text);
    }

    #[test]
    fn already_wrapped_body_only_gains_the_import() {
        let barrel = "  return (\n    <AuthProvider>\n      {children}\n    </AuthProvider>\n  );\n";
        let result = wrap_provider(barrel, &auth(), "AuthProvider", "./auth-provider");
        assert_eq!(result.outcome, WrapOutcome::AlreadyWrapped);
        assert_eq!(
            result.text,
            format!("import AuthProvider from './auth-provider';\n{barrel}")
        );
    }

    #[test]
    fn tag_with_props_counts_as_wrapped() {
        assert!(has_opening_tag("<AuthProvider value={v}>x</AuthProvider>", "AuthProvider"));
        assert!(!has_opening_tag("<AuthProviderLegacy>x</AuthProviderLegacy>", "AuthProvider"));
    }

    #[test]
    fn providers_nest_outside_previous_ones() {
        let barrel = "  return <>{children}</>;\n";
        let first = wrap_provider(barrel, &auth(), "AuthProvider", "./auth-provider");
        let theme = ExportSet::from_names(["ThemeProvider"], true);
        let result = wrap_provider(&first.text, &theme, "ThemeProvider", "./theme-provider");
        assert_eq!(result.outcome, WrapOutcome::Wrapped);
        assert!(result.text.contains(
            "return (\n  <ThemeProvider>\n  <AuthProvider>\n  <>{children}</>\n</AuthProvider>\n</ThemeProvider>\n);"
        ));
    }

    #[test]
    fn non_jsx_body_is_left_alone() {
        let barrel = "const App = ({ children }) => {\n  return children;\n};\n";
        let result = wrap_provider(barrel, &auth(), "AuthProvider", "./auth-provider");
        assert_eq!(result.outcome, WrapOutcome::UnrecognizedBody);
        assert_eq!(
            result.text,
            format!("import AuthProvider from './auth-provider';\n{barrel}")
        );
    }
}
