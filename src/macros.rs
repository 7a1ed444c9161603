/// Boxes a value as a trait object, for registering implementations behind a trait.
///
/// `boxed!(Sloth::new(); Animal)` is `Box::new(Sloth::new()) as Box<dyn Animal>`,
/// extra bounds go after the trait: `boxed!(Sloth::new(); Animal + Send + Sync)`.
#[macro_export]
macro_rules! boxed {
    ($val:expr ; $trait_name:tt $($bounds:tt)*) => {{
        Box::new($val) as Box<dyn $trait_name $($bounds)*>
    }};
}
