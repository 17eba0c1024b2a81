/// Parameterless construction, the way the host instantiates a plugin.
///
/// Implementations must produce a fully configured strategy; the host never
/// passes settings of its own.
pub trait Initiable: Sized {
    fn init() -> Self;
}
