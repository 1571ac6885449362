fn main() {
    neon_swarm::game::run();
}
