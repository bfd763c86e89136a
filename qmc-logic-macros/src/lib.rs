//! Compile-time construction of `qmc_logic::Term` values
//!
//! Only [`expr!`] lives here; it is re-exported from `qmc_logic`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, token, Ident, LitInt, LitStr, Token};

/// Parsed form of an `expr!` body
enum Node {
    Binding(Ident),
    Label(LitStr),
    Not(Box<Node>),
    Binary(Level, Box<Node>, Box<Node>),
}

/// Binding strength of a binary operator, loosest first
#[derive(Clone, Copy)]
enum Level {
    Or,
    And,
}

impl Level {
    fn tighter(self) -> Option<Level> {
        match self {
            Level::Or => Some(Level::And),
            Level::And => None,
        }
    }

    /// Consume one operator of this level if it comes next
    fn eat(self, input: ParseStream) -> Result<bool> {
        Ok(match self {
            Level::Or => {
                input.parse::<Option<Token![|]>>()?.is_some()
                    || input.parse::<Option<Token![+]>>()?.is_some()
            }
            Level::And => {
                input.parse::<Option<Token![&]>>()?.is_some()
                    || input.parse::<Option<Token![*]>>()?.is_some()
            }
        })
    }

    fn constructor(self) -> TokenStream2 {
        match self {
            Level::Or => quote!(::qmc_logic::Term::or),
            Level::And => quote!(::qmc_logic::Term::and),
        }
    }
}

impl Node {
    /// Nested `Term` constructor calls; operands are passed by reference
    fn expand(&self) -> TokenStream2 {
        match self {
            Node::Binding(ident) => quote!(#ident),
            Node::Label(label) => quote!(::qmc_logic::Term::variable(#label)),
            Node::Not(inner) => {
                let inner = inner.expand();
                quote!(::qmc_logic::Term::not(&(#inner)))
            }
            Node::Binary(level, lhs, rhs) => {
                let constructor = level.constructor();
                let (lhs, rhs) = (lhs.expand(), rhs.expand());
                quote!(#constructor(&(#lhs), &(#rhs)))
            }
        }
    }
}

struct Body(Node);

impl Parse for Body {
    fn parse(input: ParseStream) -> Result<Self> {
        let node = parse_level(input, Some(Level::Or))?;
        if !input.is_empty() {
            return Err(input.error("expected `&`, `*`, `|` or `+`"));
        }
        Ok(Body(node))
    }
}

/// Left-associative chain of operators at `level`; `None` means a prefix operand
fn parse_level(input: ParseStream, level: Option<Level>) -> Result<Node> {
    let Some(level) = level else {
        return parse_prefixed(input);
    };
    let mut lhs = parse_level(input, level.tighter())?;
    while level.eat(input)? {
        let rhs = parse_level(input, level.tighter())?;
        lhs = Node::Binary(level, Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_prefixed(input: ParseStream) -> Result<Node> {
    if input.parse::<Option<Token![!]>>()?.is_some() || input.parse::<Option<Token![~]>>()?.is_some()
    {
        return Ok(Node::Not(Box::new(parse_prefixed(input)?)));
    }

    if input.peek(LitInt) {
        let constant: LitInt = input.parse()?;
        return Err(syn::Error::new(
            constant.span(),
            "terms have no constants; write `v & ~v` or `v | ~v`",
        ));
    }

    let lookahead = input.lookahead1();
    if lookahead.peek(token::Paren) {
        let group;
        syn::parenthesized!(group in input);
        let node = parse_level(&group, Some(Level::Or))?;
        if !group.is_empty() {
            return Err(group.error("expected `)`"));
        }
        Ok(node)
    } else if lookahead.peek(LitStr) {
        Ok(Node::Label(input.parse()?))
    } else if lookahead.peek(Ident) {
        Ok(Node::Binding(input.parse()?))
    } else {
        Err(lookahead.error())
    }
}

/// Build a `qmc_logic::Term` from boolean operators
///
/// Operands are `Term` bindings in scope (owned or borrowed) or string literals,
/// which become `Term::variable("...")`. The expansion is plain calls to
/// `Term::and`, `Term::or` and `Term::not`; nothing is parsed at run time and no
/// operand is moved.
///
/// | Operator | Meaning |
/// |---|---|
/// | `!x`, `~x` | NOT |
/// | `x & y`, `x * y` | AND |
/// | `x \| y`, `x + y` | OR |
///
/// NOT binds tightest, then AND, then OR. AND and OR group to the left:
/// `a & b & c` builds `(a & b) & c`. Integer literals are rejected.
///
/// ```ignore
/// use qmc_logic::{create_variables, expr};
///
/// let vars = create_variables(["a", "b"])?;
/// let (a, b) = (&vars[0], &vars[1]);
/// let xor = expr!(a & !b | !a & b);
/// let gate = expr!(("en" | xor) * "clk");
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let Body(node) = parse_macro_input!(input as Body);
    node.expand().into()
}
