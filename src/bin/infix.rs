fn main() {
    infix::cli::run();
}
