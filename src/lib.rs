//! Évaluateur d’expressions infixes : jetons -> RPN (shunting-yard) -> pile.
//!
//! ```
//! let v = evaluateur_rpn::evaluate("2^3^2").unwrap();
//! assert_eq!(v, 512.0);
//! ```

pub mod noyau;

pub use noyau::{cellule, evaluate, Cellule, ErreurEval, Evaluator, FormeCompilee, Token, TokenKind};
