mod test_close_all_stops_everything;
mod test_decline_clears_state;
