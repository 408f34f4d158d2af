//! Noyau d'évaluation arithmétique
//!
//! Organisation interne :
//! - erreurs.rs : taxonomie d'erreurs typées du pipeline
//! - jetons.rs  : tokenisation (assainissement + balayage)
//! - rpn.rs     : shunting-yard (infixe -> postfix)
//! - eval.rs    : évaluation RPN par pile + pipeline complet
//! - format.rs  : arrondi significatif + repli exponentiel

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

// API publique minimale
pub use erreurs::ErreurNoyau;
pub use eval::eval_expression;
