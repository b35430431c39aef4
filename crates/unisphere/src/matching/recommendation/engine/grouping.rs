use super::super::views::GroupedUniversity;

/// Most demanding programs first, then universities by their most demanding program.
///
/// `sort_by` is stable, so equal requirements keep directory order and repeated calls
/// produce the same sequence.
pub(crate) fn order_groups(groups: &mut [GroupedUniversity]) {
    for group in groups.iter_mut() {
        group
            .programs
            .sort_by(|a, b| b.min_percentage.total_cmp(&a.min_percentage));
    }

    groups.sort_by(|a, b| b.highest_requirement().total_cmp(&a.highest_requirement()));
}
