/// stamps out a `Context` trait targeting the given error type. the enroll
/// CLI uses it so prompt and file failures can carry a short description of
/// the signup step that was running when they happened
#[macro_export]
macro_rules! context_trait {
    ($e:path) => {
        pub trait Context<T, E> {
            fn context<C>(self, cxt: C) -> std::result::Result<T, $e>
            where
                C: Into<String>;
        }
    };
}
