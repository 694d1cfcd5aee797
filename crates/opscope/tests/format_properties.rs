use opscope::format::format_positional;
use proptest::prelude::*;

proptest! {
    #[test]
    fn text_without_braces_is_unchanged(text in "[^{}]*") {
        prop_assert_eq!(format_positional(&text, &[&"x", &1]), text);
    }

    #[test]
    fn single_placeholder_is_replaced(
        prefix in "[a-z ]{0,8}",
        value in "[a-zA-Z0-9]{0,12}",
        suffix in "[a-z ]{0,8}",
    ) {
        let template = format!("{}{{0}}{}", prefix, suffix);
        prop_assert_eq!(
            format_positional(&template, &[&value]),
            format!("{}{}{}", prefix, value, suffix)
        );
    }

    #[test]
    fn out_of_range_index_is_kept(index in 1usize..50) {
        let template = format!("{{{}}}", index);
        prop_assert_eq!(format_positional(&template, &[&"only"]), template);
    }

    #[test]
    fn alignment_pads_to_width(value in "[a-z]{0,6}", width in 0isize..16) {
        let out = format_positional(&format!("{{0,{}}}", width), &[&value]);
        prop_assert_eq!(out.chars().count(), value.len().max(width as usize));
        prop_assert!(out.ends_with(value.as_str()));
    }

    #[test]
    fn any_width_is_padded_or_kept(value in "[a-z]{1,6}", width in -200_000isize..200_000) {
        let template = format!("{{0,{}}}", width);
        let out = format_positional(&template, &[&value]);
        if width.unsigned_abs() > u16::MAX as usize {
            prop_assert_eq!(out, template);
        } else {
            prop_assert_eq!(out.len(), value.len().max(width.unsigned_abs()));
        }
    }

    #[test]
    fn never_panics(template in ".*") {
        let _ = format_positional(&template, &[&"a", &2, &'c']);
    }
}
