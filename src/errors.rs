error_chain! {
    errors {
        InvalidArgument(s: &'static str) {
            description("Invalid argument")
            display("Invalid argument: {}", s)
        }
    }
}
