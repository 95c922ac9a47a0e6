/// How a descent is carried out.
///
/// Both strategies visit the same nodes and produce identical trees. `Recursive` uses one stack
/// frame per level, so a tree built from sorted input (height `N`) can exhaust the call stack.
/// `Iterative` runs in constant stack space and is the default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Descend with a call per level.
    Recursive,
    /// Descend with a loop.
    #[default]
    Iterative,
}
