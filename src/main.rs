fn main() {
    tag_replacer::app::cli::run();
}
