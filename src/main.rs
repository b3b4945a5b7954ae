fn main() {
    ninja_attack::game::run();
}
