// Common utilities shared by the macros
//
// - trait_expr: `Type: Expr` parsing and probe generation

mod trait_expr;

pub use trait_expr::*;
