use rand::Rng;
use rank_treap::treap::{Error, RankedTreap};

// Number of keys strictly greater than `key` in a sorted vector.
fn greater_than(model: &[u32], key: u32) -> usize {
    model.len() - model.iter().take_while(|&&k| k <= key).count()
}

#[test]
fn int_test_ranked_treap() {
    let mut rng = rand::thread_rng();
    let mut treap = RankedTreap::new();
    let mut model: Vec<u32> = Vec::new();

    for _ in 0..5000 {
        if model.is_empty() || rng.gen::<u32>() % 3 != 0 {
            let key = rng.gen::<u32>();
            if model.binary_search(&key).is_ok() {
                assert_eq!(treap.insert(key), Err(Error::DuplicateKey));
                continue;
            }
            let expected = greater_than(&model, key);
            assert_eq!(treap.insert(key), Ok(expected));
            let pos = model.binary_search(&key).unwrap_err();
            model.insert(pos, key);
        } else {
            let index = rng.gen_range(0, model.len());
            let expected = model.remove(model.len() - 1 - index);
            assert_eq!(treap.remove(index), Ok(expected));
        }
        assert_eq!(treap.len(), model.len());
        assert_eq!(treap.validate(), Ok(()));
    }

    for (index, key) in model.iter().rev().enumerate() {
        assert_eq!(treap.get(index), Ok(key));
        assert_eq!(treap.rank(key), Some(index));
    }
    assert_eq!(treap.iter().cloned().collect::<Vec<u32>>(), model);
}

#[test]
fn int_test_remove_max_yields_descending_keys() {
    let mut rng = rand::thread_rng();
    let mut keys: Vec<u32> = (0..1000).map(|key| key * 3).collect();
    rng.shuffle(&mut keys);

    let mut treap = RankedTreap::with_seed(rng.gen::<u32>());
    for key in &keys {
        treap.insert(*key).unwrap();
    }

    let mut removed = Vec::new();
    while !treap.is_empty() {
        let max = *treap.get(0).unwrap();
        assert_eq!(treap.remove(0), Ok(max));
        assert_eq!(treap.validate(), Ok(()));
        removed.push(max);
    }

    keys.sort();
    keys.reverse();
    assert_eq!(removed, keys);
    assert_eq!(treap.remove(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn int_test_sorted_inserts() {
    let mut treap = RankedTreap::new();
    for key in 0..10000u32 {
        assert_eq!(treap.insert(key), Ok(0));
    }
    for key in (10000..20000u32).rev() {
        assert_eq!(treap.insert(key), Ok(19999 - key as usize));
    }
    assert_eq!(treap.validate(), Ok(()));
    assert_eq!(treap.len(), 20000);
    assert_eq!(treap.get(0), Ok(&19999));
    assert_eq!(treap.get(19999), Ok(&0));
}
