use wordbits_core::{BitVec, Bits, FixedBitVec};

#[test]
fn bits_straddling_a_word_boundary() {
    let mut bv = BitVec::new();
    bv.set(63);
    bv.set(64);

    let set: Vec<_> = (0..=65).filter(|&i| bv.get(i)).collect();
    assert_eq!(set, vec![63, 64]);
    assert_eq!(bv.len(), 65);
    assert_eq!(bv.as_words().len(), 2);
}

#[test]
fn empty_vector() {
    let bv = BitVec::new();
    assert_eq!(bv.len(), 0);
    assert!(!bv.any());
    assert!(bv.none());
    assert_eq!(bv.cardinality(), 0);
    assert_eq!(bv.to_string(), "");
    assert!(bv.as_words().is_empty());
}

#[test]
fn fixed_capacity_rendering() {
    let mut bv = FixedBitVec::new(6);
    bv.set(2).unwrap();
    bv.set(3).unwrap();
    bv.set(5).unwrap();
    assert_eq!(bv.to_string(), "001101");

    let mut dynamic = BitVec::new();
    dynamic.extend([2, 3, 5]);
    assert_eq!(dynamic.to_string(), "001101");
}

#[test]
fn fixed_union_of_different_capacities() {
    let mut a = FixedBitVec::new(2);
    let mut b = FixedBitVec::new(4);
    a.set(0).unwrap();
    b.set(3).unwrap();
    a.union_with(&b);
    assert_eq!(a.to_string(), "1001");
}

#[test]
fn shift_left_drops_low_bits() {
    let mut bv: BitVec = [1, 3, 5].into_iter().collect();
    bv.shift_left(2);
    assert_eq!(bv.to_string(), "0101");
}

#[test]
fn toggle_past_storage_behaves_like_set() {
    let mut toggled: BitVec = [4].into_iter().collect();
    let mut set = toggled.clone();
    toggled.toggle(500);
    set.set(500);
    assert_eq!(toggled, set);
    assert_eq!(toggled.as_words(), set.as_words());
}

#[test]
fn clone_is_independent() {
    let original: BitVec = [1, 70].into_iter().collect();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.set(2);
    copy.clear(70);
    assert_eq!(original.iter().collect::<Vec<_>>(), vec![1, 70]);
    assert_eq!(copy.iter().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn len_tracks_highest_bit() {
    let mut bv = BitVec::new();
    bv.set(0);
    assert_eq!(bv.len(), 1);
    bv.set(999);
    assert_eq!(bv.len(), 1000);
    bv.toggle(999);
    assert_eq!(bv.len(), 1);
}

#[test]
fn complement_reads_clear_past_storage() {
    let mut bv: BitVec = [1].into_iter().collect();
    bv.complement();
    assert!(bv.get(0));
    assert!(!bv.get(1));
    assert!(bv.get(63));
    assert!(!bv.get(10_000));
}

#[test]
fn dyadic_ops_leave_operand_untouched() {
    let long: BitVec = [0, 300].into_iter().collect();
    let words = long.as_words().to_vec();

    let mut a: BitVec = [0].into_iter().collect();
    a.union_with(&long);
    a.intersect_with(&long);
    a.difference_with(&long);
    a.symmetric_difference_with(&long);

    assert_eq!(long.as_words(), words.as_slice());
    assert_eq!(a, long);
}

#[test]
fn variants_agree_on_traversal() {
    fn ones<B: Bits>(bits: &B) -> Vec<usize> {
        let mut out = Vec::new();
        let mut cur = bits.first_set();
        while let Some(i) = cur {
            out.push(i);
            cur = bits.next_set(i);
        }
        out
    }

    let dynamic: BitVec = [3, 64, 65].into_iter().collect();
    let mut fixed = FixedBitVec::new(70);
    for i in [3, 64, 65] {
        fixed.set(i).unwrap();
    }
    assert_eq!(ones(&dynamic), ones(&fixed));
}
