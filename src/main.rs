fn main() {
    othello_engine::console::run();
}
