mod test_announcement_rings_once;
mod test_join_affordance_lookup;
