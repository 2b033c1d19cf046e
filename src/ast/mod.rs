/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the trees the grammar engine builds
///
/// Submodules:
/// - ast: Core node trait, node wrapper, plain leaf and list nodes
/// - factory: Node shapes used to construct nodes during parsing
/// - nodes: Ready-made leaf and composite shapes
pub mod ast;
pub mod factory;
pub mod nodes;
