fn main() {
    gemini_review::app::cli::run();
}
