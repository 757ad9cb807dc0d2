fn main() {
    onb_tasks::entry_points::onb(onb::version::get());
}
