//! Behavioral tests for `WeakArray`: liveness, equality, and splicing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use rstest::rstest;

use collext::WeakArray;

fn make_refs(n: usize) -> Vec<Rc<String>> {
    (0..n).map(|i| Rc::new(format!("ref-{i}"))).collect()
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[rstest]
#[case(0, true)]
#[case(1, false)]
#[case(5, false)]
fn given_n_referents_when_collecting_then_slot_count_matches(
    #[case] n: usize,
    #[case] empty: bool,
) {
    let refs = make_refs(n);
    let sut: WeakArray<String> = refs.iter().collect();

    assert_eq!(sut.len(), n);
    assert_eq!(sut.is_empty(), empty);
}

#[test]
fn given_live_referents_when_iterating_then_every_slot_is_live() {
    let refs = make_refs(5);
    let sut: WeakArray<String> = refs.iter().collect();

    assert!(sut.iter().all(|slot| slot.is_some()));
}

#[test]
fn given_dropped_referents_when_reading_then_every_slot_is_empty() {
    let refs = make_refs(5);
    let sut: WeakArray<String> = refs.iter().collect();

    drop(refs);

    assert_eq!(sut.len(), 5);
    assert!(sut.iter().all(|slot| slot.is_none()));
}

#[test]
fn given_two_fully_reclaimed_arrays_of_equal_length_then_they_are_equal() {
    let sut1: WeakArray<String> = make_refs(5).iter().collect();
    let sut2: WeakArray<String> = make_refs(5).iter().collect();

    // The temporaries are gone, so every slot reads empty on both sides.
    assert!(sut1.iter().all(|slot| slot.is_none()));
    assert!(sut2.iter().all(|slot| slot.is_none()));
    assert_eq!(sut1, sut2);
    assert_eq!(hash_of(&sut1), hash_of(&sut2));
}

#[test]
fn given_equal_values_when_comparing_then_arrays_are_equal() {
    let refs1 = make_refs(3);
    let refs2 = make_refs(3);
    let sut1: WeakArray<String> = refs1.iter().collect();
    let sut2: WeakArray<String> = refs2.iter().collect();

    assert_eq!(sut1, sut2);
    assert_eq!(hash_of(&sut1), hash_of(&sut2));
}

#[test]
fn given_a_live_and_an_empty_slot_when_comparing_then_arrays_differ() {
    let kept = Rc::new("ref-0".to_string());
    let sut1: WeakArray<String> = [&kept].into_iter().collect();

    let sut2: WeakArray<String> = make_refs(1).iter().collect();
    assert!(sut2.get(0).is_none());

    assert_ne!(sut1, sut2);
}

#[test]
fn given_arrays_of_different_length_when_comparing_then_they_differ() {
    let sut1: WeakArray<String> = make_refs(2).iter().collect();
    let sut2: WeakArray<String> = make_refs(3).iter().collect();

    assert_ne!(sut1, sut2);
}

#[test]
fn given_reclaimed_slots_when_removing_dropped_then_live_slots_remain_in_order() {
    let kept = Rc::new("kept".to_string());
    let mut sut: WeakArray<String> = WeakArray::new();
    {
        let transient = make_refs(2);
        sut.push(Some(&transient[0]));
        sut.push(Some(&kept));
        sut.push(Some(&transient[1]));
    }
    assert_eq!(sut.len(), 3);

    sut.remove_dropped();

    assert_eq!(sut.len(), 1);
    let survivor = sut.get(0).expect("live slot");
    assert!(Rc::ptr_eq(&survivor, &kept));
}

#[test]
fn given_a_slot_when_reseating_it_then_the_new_referent_is_read() {
    let refs = make_refs(5);
    let mut sut: WeakArray<String> = refs.iter().collect();

    let replacement = Rc::new("replacement".to_string());
    sut.set(2, Some(&replacement));

    let observed = sut.get(2).expect("live slot");
    assert!(Rc::ptr_eq(&observed, &replacement));
}

#[test]
fn given_a_reseated_slot_when_the_referent_drops_then_the_slot_empties() {
    let refs = make_refs(5);
    let mut sut: WeakArray<String> = refs.iter().collect();

    let replacement = Rc::new("replacement".to_string());
    sut.set(2, Some(&replacement));
    drop(replacement);

    assert!(sut.get(2).is_none());
    assert!(sut.get(1).is_some());
}

#[test]
fn given_a_slot_when_clearing_it_then_it_reads_empty() {
    let refs = make_refs(3);
    let mut sut: WeakArray<String> = refs.iter().collect();

    sut.set(1, None);

    assert!(sut.get(0).is_some());
    assert!(sut.get(1).is_none());
    assert!(sut.get(2).is_some());
}

#[test]
fn given_an_out_of_range_index_when_reading_then_none_is_returned() {
    let refs = make_refs(2);
    let sut: WeakArray<String> = refs.iter().collect();

    assert!(sut.get(7).is_none());
}

#[test]
fn given_a_replaced_subrange_when_reading_then_untouched_slots_keep_identity() {
    let refs = make_refs(10);
    let mut sut: WeakArray<String> = refs.iter().collect();

    let replacements = make_refs(3);
    sut.replace_range(2..5, replacements.iter().map(Some));

    assert_eq!(sut.len(), 10);
    for (index, original) in refs.iter().enumerate() {
        if (2..5).contains(&index) {
            continue;
        }
        let observed = sut.get(index).expect("live slot");
        assert!(Rc::ptr_eq(&observed, original), "slot {index} was disturbed");
    }
    for (offset, replacement) in replacements.iter().enumerate() {
        let observed = sut.get(2 + offset).expect("live slot");
        assert!(Rc::ptr_eq(&observed, replacement));
    }
}

#[test]
fn given_fewer_replacements_than_the_range_when_splicing_then_the_suffix_moves_up() {
    let refs = make_refs(10);
    let mut sut: WeakArray<String> = refs.iter().collect();

    let replacements = make_refs(2);
    sut.replace_range(2..5, replacements.iter().map(Some));

    assert_eq!(sut.len(), 9);
    let shifted = sut.get(4).expect("live slot");
    assert!(Rc::ptr_eq(&shifted, &refs[5]));
}

#[test]
fn given_empty_replacements_when_splicing_then_slots_may_start_empty() {
    let refs = make_refs(4);
    let mut sut: WeakArray<String> = refs.iter().collect();

    sut.replace_range(1..3, [None, None]);

    assert_eq!(sut.len(), 4);
    assert!(sut.get(0).is_some());
    assert!(sut.get(1).is_none());
    assert!(sut.get(2).is_none());
    assert!(sut.get(3).is_some());
}
