fn main() { matkit_tasks::entry_points::matkit() }
