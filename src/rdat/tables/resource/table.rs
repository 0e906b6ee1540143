use crate::{
    rdat::{
        tables::{RecordTable, ResourceInfoRaw, ResourceReader, StringTable},
        ResourceClass, RuntimeDataPartType,
    },
    Error, Result,
};

/// A contiguous run of records of one [`ResourceClass`] inside the resource table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassRange {
    /// Index of the first record of the class
    pub start: u32,
    /// Number of records of the class
    pub count: u32,
}

impl ClassRange {
    /// One past the last record of the class
    #[must_use]
    pub fn end(&self) -> u32 {
        self.start + self.count
    }

    /// Returns `true` if `index` falls inside this range
    #[must_use]
    pub fn contains(&self, index: u32) -> bool {
        index >= self.start && index < self.end()
    }
}

/// The `Resource` table, partitioned by resource class.
///
/// Records are grouped by class in the order CBuffer, Sampler, SRV, UAV. The partition is
/// derived once, by a single linear scan counting the records of each class; records with an
/// unknown class tag are not counted in any class. [`ResourceTable::validate_partition`] checks
/// that the records actually follow that grouping.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResourceTable<'a> {
    records: RecordTable<'a, ResourceInfoRaw>,
    ranges: [ClassRange; 4],
}

impl<'a> ResourceTable<'a> {
    /// Create the resource table over `data` and derive its class partition.
    ///
    /// # Errors
    /// Returns an error if the region holds more records than can be indexed.
    pub fn from(data: &'a [u8]) -> Result<ResourceTable<'a>> {
        let records = RecordTable::<ResourceInfoRaw>::new(data)?;

        let mut counts = [0_u32; 4];
        for record in records.iter() {
            if let Some(class) = record.resource_class() {
                counts[class.table_position()] += 1;
            }
        }

        let mut ranges = [ClassRange::default(); 4];
        let mut start = 0_u32;
        for (range, count) in ranges.iter_mut().zip(counts) {
            *range = ClassRange { start, count };
            start += count;
        }

        Ok(ResourceTable { records, ranges })
    }

    /// Check that the region is a whole number of records.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a partial record trails the table.
    pub fn validate(&self) -> Result<()> {
        self.records.validate()
    }

    /// Check that every counted record sits inside the range of its class, and that the
    /// partition covers no more than the records the table holds.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a record of a known class is out of the
    /// CBuffer, Sampler, SRV, UAV order, or a record of unknown class sits between them.
    pub fn validate_partition(&self) -> Result<()> {
        if self.num_resources() > self.records.row_count() {
            return Err(malformed_error!(
                "Resource partition covers {} records, table holds {}",
                self.num_resources(),
                self.records.row_count()
            ));
        }

        for record in self.records.iter() {
            let Some(class) = record.resource_class() else {
                if record.index < self.num_resources() {
                    return Err(malformed_error!(
                        "Resource {} with unknown class {} inside the classified range",
                        record.index,
                        record.class
                    ));
                }
                continue;
            };

            if !self.range(class).contains(record.index) {
                return Err(malformed_error!(
                    "Resource {} of class {} is outside of its class range",
                    record.index,
                    class
                ));
            }
        }

        Ok(())
    }

    /// Total number of records in the table, including records of unknown class
    #[must_use]
    pub fn record_count(&self) -> u32 {
        self.records.row_count()
    }

    /// Number of resources with a known class
    #[must_use]
    pub fn num_resources(&self) -> u32 {
        self.ranges.iter().map(|range| range.count).sum()
    }

    /// The partition range of `class`
    #[must_use]
    pub fn range(&self, class: ResourceClass) -> ClassRange {
        self.ranges[class.table_position()]
    }

    /// Number of constant buffers
    #[must_use]
    pub fn num_cbuffers(&self) -> u32 {
        self.range(ResourceClass::CBuffer).count
    }

    /// Number of samplers
    #[must_use]
    pub fn num_samplers(&self) -> u32 {
        self.range(ResourceClass::Sampler).count
    }

    /// Number of shader resource views
    #[must_use]
    pub fn num_srvs(&self) -> u32 {
        self.range(ResourceClass::SRV).count
    }

    /// Number of unordered access views
    #[must_use]
    pub fn num_uavs(&self) -> u32 {
        self.range(ResourceClass::UAV).count
    }

    /// Decode the raw record at flat index `index`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index >= num_resources()`.
    pub fn raw(&self, index: u32) -> Result<ResourceInfoRaw> {
        if index >= self.num_resources() {
            return Err(Error::InvalidReference {
                table: RuntimeDataPartType::Resource,
                reference: index,
            });
        }

        self.records.get(index)
    }

    /// Get a view on the resource at flat index `index`, resolving names through `strings`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index >= num_resources()`.
    pub fn get_item(&self, index: u32, strings: &StringTable<'a>) -> Result<ResourceReader<'a>> {
        Ok(ResourceReader::new(self.raw(index)?, *strings))
    }

    /// Get the `index`-th resource of `class`.
    ///
    /// The flat position is the start of the class range plus `index`, the start being the sum
    /// of the counts of all classes ordered before `class`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index` is not below the class count.
    pub fn get_by_class(
        &self,
        class: ResourceClass,
        index: u32,
        strings: &StringTable<'a>,
    ) -> Result<ResourceReader<'a>> {
        let range = self.range(class);
        if index >= range.count {
            return Err(Error::InvalidReference {
                table: RuntimeDataPartType::Resource,
                reference: index,
            });
        }

        self.get_item(range.start + index, strings)
    }

    /// Get the `index`-th constant buffer
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index >= num_cbuffers()`.
    pub fn get_cbuffer(&self, index: u32, strings: &StringTable<'a>) -> Result<ResourceReader<'a>> {
        self.get_by_class(ResourceClass::CBuffer, index, strings)
    }

    /// Get the `index`-th sampler
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index >= num_samplers()`.
    pub fn get_sampler(&self, index: u32, strings: &StringTable<'a>) -> Result<ResourceReader<'a>> {
        self.get_by_class(ResourceClass::Sampler, index, strings)
    }

    /// Get the `index`-th shader resource view
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index >= num_srvs()`.
    pub fn get_srv(&self, index: u32, strings: &StringTable<'a>) -> Result<ResourceReader<'a>> {
        self.get_by_class(ResourceClass::SRV, index, strings)
    }

    /// Get the `index`-th unordered access view
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index >= num_uavs()`.
    pub fn get_uav(&self, index: u32, strings: &StringTable<'a>) -> Result<ResourceReader<'a>> {
        self.get_by_class(ResourceClass::UAV, index, strings)
    }

    /// Iterate over the views of all classified resources, in table order
    pub fn iter<'s>(
        &'s self,
        strings: &'s StringTable<'a>,
    ) -> impl Iterator<Item = Result<ResourceReader<'a>>> + 's {
        (0..self.num_resources()).map(move |index| self.get_item(index, strings))
    }
}
