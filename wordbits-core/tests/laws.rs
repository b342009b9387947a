use wordbits_core::{
    BitVec,
    arbitrary::{GenConfig, Generator},
};

/// Seed for every law; set `WORDBITS_SEED` to explore others.
const SEED: u64 = 0x5eed_b175;

fn generator() -> Generator {
    let config = GenConfig::default()
        .with_cases(300)
        .with_seed_from_env("WORDBITS_SEED", SEED);
    Generator::new(&config)
}

fn trimmed(bv: &BitVec) -> bool {
    bv.as_words().last().is_none_or(|&w| w != 0)
}

fn union(a: &BitVec, b: &BitVec) -> BitVec {
    let mut out = a.clone();
    out.union_with(b);
    out
}

fn intersect(a: &BitVec, b: &BitVec) -> BitVec {
    let mut out = a.clone();
    out.intersect_with(b);
    out
}

fn difference(a: &BitVec, b: &BitVec) -> BitVec {
    let mut out = a.clone();
    out.difference_with(b);
    out
}

fn symmetric_difference(a: &BitVec, b: &BitVec) -> BitVec {
    let mut out = a.clone();
    out.symmetric_difference_with(b);
    out
}

#[test]
fn clone_equals_original() {
    generator().check("clone", |g| {
        let a = g.bit_vec();
        a.clone() == a
    });
}

#[test]
fn any_after_set() {
    generator().check("any", |g| {
        let mut s = BitVec::new();
        let i = g.index();
        let was_any = s.any();
        s.set(i);
        !was_any && s.any() && s.get(i)
    });
}

#[test]
fn any_range_sees_set_bit() {
    generator().check("any_range", |g| {
        let (i, l, r) = (g.index(), g.index(), g.index());
        let range = i.saturating_sub(l)..i + r + 1;
        let mut s = BitVec::new();
        let before = s.any_range(range.clone());
        s.set(i);
        !before && s.any_range(range)
    });
}

#[test]
fn cardinality_counts_distinct_bits() {
    generator().check("cardinality", |g| {
        let mut s = BitVec::new();
        let mut count = 0;
        for _ in 0..g.index() % 200 {
            let i = g.index();
            if !s.get(i) {
                s.set(i);
                count += 1;
            }
        }
        s.cardinality() == count
    });
}

#[test]
fn set_range_then_clear_range_is_empty() {
    generator().check("clear_range", |g| {
        let (i, j) = (g.index(), g.index());
        let mut s = BitVec::new();
        s.set_range(i..j);
        let all = s.all_range(i..j);
        s.clear_range(i..j);
        all && s.none() && s.as_words().is_empty()
    });
}

#[test]
fn len_is_highest_bit_plus_one() {
    generator().check("len", |g| {
        let mut s = BitVec::new();
        let mut max = 0;
        for _ in 0..g.index() % 100 {
            let i = g.index();
            s.set(i);
            max = max.max(i + 1);
            if s.len() != max {
                return false;
            }
        }
        true
    });
}

#[test]
fn union_laws() {
    generator().check("union", |g| {
        let (a, b, c) = (g.bit_vec(), g.bit_vec(), g.bit_vec());

        union(&a, &b) == union(&b, &a)
            && union(&a, &union(&b, &c)) == union(&union(&a, &b), &c)
            && a.is_subset(&union(&a, &b))
            && union(&a, &a) == a
            && union(&BitVec::new(), &a) == a
            && (a.is_subset(&b) == (union(&a, &b) == b))
            && trimmed(&union(&a, &b))
    });
}

#[test]
fn intersect_laws() {
    generator().check("intersect", |g| {
        let (a, b, c) = (g.bit_vec(), g.bit_vec(), g.bit_vec());

        intersect(&a, &b) == intersect(&b, &a)
            && intersect(&a, &intersect(&b, &c)) == intersect(&intersect(&a, &b), &c)
            && intersect(&a, &b).is_subset(&a)
            && intersect(&a, &a) == a
            && intersect(&BitVec::new(), &a) == BitVec::new()
            && (a.is_subset(&b) == (intersect(&a, &b) == a))
            && intersect(&a, &union(&a, &b)) == a
            && union(&a, &intersect(&a, &b)) == a
            && trimmed(&intersect(&a, &b))
    });
}

#[test]
fn difference_laws() {
    generator().check("difference", |g| {
        let (a, b) = (g.bit_vec(), g.bit_vec());
        let a_minus_b = difference(&a, &b);
        let b_minus_a = difference(&b, &a);

        a_minus_b.is_subset(&a)
            && intersect(&a_minus_b, &b).none()
            && b_minus_a.is_subset(&b)
            && intersect(&b_minus_a, &a).none()
            && trimmed(&a_minus_b)
    });
}

#[test]
fn symmetric_difference_laws() {
    generator().check("symmetric_difference", |g| {
        let (a, b) = (g.bit_vec(), g.bit_vec());

        symmetric_difference(&a, &b) == difference(&union(&a, &b), &intersect(&a, &b))
            && symmetric_difference(&a, &b) == symmetric_difference(&b, &a)
            && symmetric_difference(&a, &a).as_words().is_empty()
            && trimmed(&symmetric_difference(&a, &b))
    });
}

#[test]
fn de_morgan_over_common_window() {
    generator().check("de_morgan", |g| {
        let (a, b) = (g.bit_vec(), g.bit_vec());
        let window = 0..a.len().max(b.len());
        let not = |bv: &BitVec| {
            let mut out = bv.clone();
            out.toggle_range(window.clone());
            out
        };

        not(&union(&a, &b)) == intersect(&not(&a), &not(&b))
            && not(&intersect(&a, &b)) == union(&not(&a), &not(&b))
    });
}

#[test]
fn next_walk_visits_every_bit_in_order() {
    generator().check("next", |g| {
        let s = g.bit_vec();
        let mut walked = Vec::new();
        let mut cur = s.first_set();
        while let Some(i) = cur {
            walked.push(i);
            cur = s.next_set(i);
        }
        let expected: Vec<_> = (0..s.len()).filter(|&i| s.get(i)).collect();
        walked == expected && walked == s.iter().collect::<Vec<_>>()
    });
}

#[test]
fn prev_walk_visits_every_bit_in_reverse() {
    generator().check("prev", |g| {
        let s = g.bit_vec();
        let mut walked = Vec::new();
        let mut cur = s.prev_set(s.len());
        while let Some(i) = cur {
            walked.push(i);
            cur = s.prev_set(i);
        }
        walked == s.iter().rev().collect::<Vec<_>>()
    });
}

#[test]
fn fixed_complement_is_an_involution() {
    generator().check("fixed_complement", |g| {
        let a = g.fixed_bit_vec();
        let mut twice = a.clone();
        twice.complement();
        let flipped = twice.cardinality() == a.len() - a.cardinality();
        twice.complement();
        flipped && twice == a
    });
}

#[test]
fn fixed_and_dynamic_agree_on_union() {
    generator().check("fixed_union", |g| {
        let (a, b) = (g.fixed_bit_vec(), g.fixed_bit_vec());
        let mut fixed = a.clone();
        fixed.union_with(&b);

        let mut dynamic: BitVec = a.iter().collect();
        dynamic.union_with(&b.iter().collect::<BitVec>());

        fixed.len() == a.len().max(b.len()) && fixed.iter().eq(dynamic.iter())
    });
}
