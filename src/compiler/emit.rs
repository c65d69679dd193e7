use std::fmt::Write;

use super::{CompileError, CompileResult};
use crate::pattern::leading_segment;
use crate::radix::{RouteNode, RouteTable};

const INDENT: &str = "    ";

/// Names injected into the generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Path the generated code uses to reach this crate, e.g. `::routify`
    /// or `crate` when the output lives inside the crate itself.
    pub crate_path: String,
    pub var_name: String,
    /// Handler type the table is parameterized with.
    pub handler_type: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            crate_path: "::routify".to_string(),
            var_name: "ROUTES".to_string(),
            handler_type: "Handler".to_string(),
        }
    }
}

/// Writes `table` as the source of a `static` [`StaticTable`].
///
/// Output is stable for a given table: methods are sorted by name and
/// literal edges by leading segment, which is also the order the compiled
/// table's binary search expects.
///
/// [`StaticTable`]: crate::readonly::StaticTable
pub fn emit(table: &RouteTable<String, String>, options: &EmitOptions) -> CompileResult<String> {
    for name in [&options.crate_path, &options.var_name, &options.handler_type] {
        check_symbol(name)?;
    }

    let krate = options.crate_path.as_str();
    let mut out = String::new();
    writeln!(out, "// Generated by routify. Do not edit.")?;
    writeln!(out)?;
    writeln!(
        out,
        "pub static {}: {krate}::StaticTable<{}> = {krate}::StaticTable {{ methods: &[",
        options.var_name, options.handler_type
    )?;

    let mut methods: Vec<_> = table.methods().collect();
    methods.sort_unstable_by_key(|(method, _)| *method);
    for (method, root) in methods {
        write!(out, "{INDENT}({method:?}, ")?;
        write_node(&mut out, root, 1, krate)?;
        writeln!(out, "),")?;
    }

    writeln!(out, "] }};")?;
    tracing::debug!(routes = table.len(), bytes = out.len(), "emitted route table");
    Ok(out)
}

fn write_node(
    out: &mut String,
    node: &RouteNode<String, String>,
    depth: usize,
    krate: &str,
) -> CompileResult<()> {
    let pad = INDENT.repeat(depth + 1);
    writeln!(out, "{krate}::StaticNode {{")?;

    match node.handler() {
        Some(handler) => {
            check_symbol(handler)?;
            writeln!(out, "{pad}handler: Some({handler}),")?;
        }
        None => writeln!(out, "{pad}handler: None,")?,
    }

    match node.param() {
        Some(slot) => {
            let validator = match slot.validator() {
                Some(name) => {
                    check_symbol(name)?;
                    format!("Some({name})")
                }
                None => "None".to_string(),
            };
            writeln!(
                out,
                "{pad}param: Some({krate}::StaticParam {{ name: {:?}, validator: {validator} }}),",
                slot.name()
            )?;
        }
        None => writeln!(out, "{pad}param: None,")?,
    }

    let mut edges: Vec<_> = node.literals().collect();
    if edges.is_empty() {
        writeln!(out, "{pad}literals: &[],")?;
    } else {
        edges.sort_unstable_by(|a, b| leading_segment(a.key()).cmp(leading_segment(b.key())));
        writeln!(out, "{pad}literals: &[")?;
        for edge in edges {
            write!(out, "{pad}{INDENT}({:?}, ", edge.key())?;
            write_node(out, edge.node(), depth + 2, krate)?;
            writeln!(out, "),")?;
        }
        writeln!(out, "{pad}],")?;
    }

    match node.param_child() {
        Some(child) => {
            write!(out, "{pad}child: Some(&")?;
            write_node(out, child, depth + 1, krate)?;
            writeln!(out, "),")?;
        }
        None => writeln!(out, "{pad}child: None,")?,
    }

    write!(out, "{}}}", INDENT.repeat(depth))?;
    Ok(())
}

/// Handler and validator names are pasted into the output verbatim, so they
/// must be plain paths like `handlers::index`.
fn check_symbol(name: &str) -> CompileResult<()> {
    let valid = !name.is_empty()
        && name
            .trim_start_matches("::")
            .split("::")
            .all(|part| {
                let mut chars = part.chars();
                chars
                    .next()
                    .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            });
    if valid {
        Ok(())
    } else {
        Err(CompileError::InvalidSymbol {
            name: name.to_string(),
        })
    }
}
