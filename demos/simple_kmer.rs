use nthash_roll::{NtHashBuilder, NtHashError};

fn main() -> Result<(), NtHashError> {
    let seq = "ATCGTACGATGCATGCATGCTGACG";
    let kmer_size: usize = 6;
    let num_hashes: usize = 3;

    // build the iterator
    let iter = NtHashBuilder::new(seq)
        .k(kmer_size)
        .num_hashes(num_hashes)
        .canonical(true)
        .finish()?;

    for (pos, hashes) in iter {
        let end = pos + kmer_size;
        // print the k‑mer & the hashes (in hex debug)
        println!("{} {:x?}", &seq[pos..end], hashes);
    }

    Ok(())
}
