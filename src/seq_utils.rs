/// Complement of one base, with any base outside of ACGTN reported as N
fn comp_base(x: u8) -> u8 {
    match x {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        b'n' => b'n',
        _ => b'N',
    }
}

/// True if the sequence only contains unambiguous bases or N
pub fn is_supported_dna_seq(dna: &[u8]) -> bool {
    dna.iter()
        .all(|x| matches!(x, b'A' | b'C' | b'G' | b'T' | b'N' | b'a' | b'c' | b'g' | b't' | b'n'))
}

pub fn rev_comp(dna: &[u8]) -> Vec<u8> {
    dna.iter().rev().map(|&x| comp_base(x)).collect::<Vec<_>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rev_comp() {
        let input = b"NNATGCG".to_vec();
        let expected_output = b"CGCATNN".to_vec();
        let output = rev_comp(&input);
        assert_eq!(output, expected_output);
    }

    #[test]
    fn test_rev_comp_ambiguous_bases() {
        assert_eq!(rev_comp(b"ARYn-"), b"NnNNT".to_vec());
    }

    #[test]
    fn test_is_supported_dna_seq() {
        assert!(is_supported_dna_seq(b"ACGTNacgtn"));
        assert!(!is_supported_dna_seq(b"ACGR"));
    }
}
