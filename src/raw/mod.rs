mod raw_sorted_list;

pub(crate) use raw_sorted_list::RawSortedList;
