/// Bitset superpositions over tile indices
pub mod bitset;
/// Synthesis orchestration and the generation result type
pub mod executor;
/// Border-constrained initial possibility space
pub mod initialize;
/// Adjacency rules and constraint propagation
pub mod propagation;
/// Solver contract and wave function collapse implementation
pub mod solver;
